//! ReviewPipeline — the stage sequencer for one professor's reviews.

use tassel_cluster::{classify_cluster, cluster_by_course, single_cluster_per_course};
use tassel_core::config::PipelineConfig;
use tassel_core::errors::TasselResult;
use tassel_core::models::{ClusterSummary, CourseSummary, DegradationEvent, ProfessorSummary};
use tassel_core::review::{ProcessedReview, RawReview};
use tassel_core::traits::{IEmbeddingProvider, ISummaryProvider};
use tassel_embeddings::{CacheCoordinator, EmbeddingGateway};
use tassel_normalize::{CourseCodeNormalizer, NormalizationTables, ProfessorContext};
use tassel_preprocess::Preprocessor;
use tassel_summarize::ClusterSummarizer;
use tracing::{debug, info, warn};

use crate::aggregation;

/// One professor's pipeline, preprocess through aggregation.
///
/// Single-threaded and synchronous: each stage completes before the next
/// starts. Concurrency belongs to the caller — independent professors can
/// run in parallel pipelines sharing nothing but the (race-tolerant)
/// embedding cache file.
pub struct ReviewPipeline {
    config: PipelineConfig,
    normalizer: CourseCodeNormalizer,
    preprocessor: Preprocessor,
    gateway: EmbeddingGateway,
    summarizer: ClusterSummarizer,
    events: Vec<DegradationEvent>,
}

impl ReviewPipeline {
    /// Build a pipeline around the injected model capabilities.
    ///
    /// Fails only if the durable embedding cache cannot be opened.
    pub fn new(
        config: PipelineConfig,
        tables: NormalizationTables,
        embedding_provider: Box<dyn IEmbeddingProvider>,
        summary_provider: Box<dyn ISummaryProvider>,
    ) -> TasselResult<Self> {
        let cache = match &config.embedding.cache_path {
            Some(path) => CacheCoordinator::with_durable(config.embedding.l1_cache_size, path)?,
            None => CacheCoordinator::new(config.embedding.l1_cache_size),
        };
        let gateway = EmbeddingGateway::new(embedding_provider, Box::new(cache));
        let preprocessor = Preprocessor::new(config.preprocess.clone());
        let summarizer = ClusterSummarizer::new(summary_provider, config.summary.clone());
        let normalizer = CourseCodeNormalizer::new(tables);

        Ok(Self {
            config,
            normalizer,
            preprocessor,
            gateway,
            summarizer,
            events: Vec::new(),
        })
    }

    /// Run the full pipeline for one professor.
    ///
    /// Never fails under degraded capabilities — every soft failure is
    /// recovered in its stage and recorded as a degradation event.
    pub fn run(
        &mut self,
        professor_id: &str,
        professor_dept: Option<&str>,
        raws: &[RawReview],
    ) -> TasselResult<ProfessorSummary> {
        if raws.is_empty() {
            info!(professor_id, "no reviews, returning empty summary");
            return Ok(ProfessorSummary::empty(professor_id));
        }

        // Stage 1: Preprocess.
        let outcome = self.preprocessor.process(raws, Some(&self.gateway));
        self.events.extend(outcome.events);
        info!(
            professor_id,
            kept = outcome.reviews.len(),
            "stage 1: preprocess complete"
        );
        if outcome.reviews.is_empty() {
            return Ok(ProfessorSummary::empty(professor_id));
        }

        // Stage 2: Normalize + expand.
        let ctx = ProfessorContext {
            professor_dept: professor_dept.map(str::to_string),
            other_course_codes: raws.iter().filter_map(|r| r.course_code.clone()).collect(),
        };
        let reviews = self.normalize_and_expand(outcome.reviews, &ctx);
        info!(
            professor_id,
            expanded = reviews.len(),
            "stage 2: normalization complete"
        );

        // Stage 3: Embed.
        let ids: Vec<String> = reviews.iter().map(|r| r.review_id.clone()).collect();
        let texts: Vec<String> = reviews.iter().map(|r| r.text.clone()).collect();

        // Stage 4: Cluster by course. A dead embedding capability degrades
        // to one cluster per course rather than losing the run.
        let clusters = match self.gateway.embed_reviews(&ids, &texts) {
            Ok(vectors) => cluster_by_course(&reviews, &vectors, &self.config.cluster),
            Err(e) => {
                warn!(error = %e, "embedding failed, clustering degraded");
                self.events.push(DegradationEvent::now(
                    "pipeline",
                    format!("embedding failed: {e}"),
                    "single cluster per course",
                ));
                single_cluster_per_course(&reviews)
            }
        };
        self.events.extend(clusters.events);
        info!(
            professor_id,
            courses = clusters.by_course.len(),
            noise = clusters.noise_count,
            "stage 4: clustering complete"
        );

        // Stage 5: Classify and summarize each cluster, then roll up
        // per course. BTreeMap ordering keeps runs deterministic.
        let mut course_summaries: Vec<CourseSummary> = Vec::new();
        for (course, course_clusters) in &clusters.by_course {
            let mut summaries: Vec<ClusterSummary> = Vec::new();
            for cluster in course_clusters {
                let cluster_type = classify_cluster(&cluster.reviews);
                let outcome = self.summarizer.summarize_cluster(&cluster.reviews, cluster_type);
                self.events.extend(outcome.events);
                summaries.push(outcome.summary);
            }
            if summaries.is_empty() {
                // Every review in the course was noise; nothing to say.
                debug!(course = %course, "no summarizable clusters, dropping course");
                continue;
            }
            course_summaries.push(aggregation::aggregate_course(course, &summaries));
        }
        info!(
            professor_id,
            courses = course_summaries.len(),
            "stage 5: summarization complete"
        );

        // Stage 6: Professor aggregation.
        let summary = aggregation::aggregate_professor(professor_id, course_summaries);
        info!(
            professor_id,
            sentiment = %summary.overall_sentiment,
            confidence = %summary.confidence,
            "pipeline complete"
        );
        Ok(summary)
    }

    /// Rewrite each review's raw course code to canonical form, cloning
    /// the review once per extra code when a compound code expands.
    fn normalize_and_expand(
        &self,
        reviews: Vec<ProcessedReview>,
        ctx: &ProfessorContext,
    ) -> Vec<ProcessedReview> {
        let mut expanded = Vec::with_capacity(reviews.len());
        for mut review in reviews {
            let raw = (!review.course_code.is_empty()).then_some(review.course_code.as_str());
            let codes = self.normalizer.normalize(raw, Some(ctx));
            let mut codes = codes.into_iter();
            // normalize never returns an empty list; UNKNOWN is the
            // contractual floor.
            let first = codes
                .next()
                .unwrap_or_else(|| tassel_core::constants::UNKNOWN_COURSE_CODE.to_string());
            let extras: Vec<ProcessedReview> =
                codes.map(|code| review.with_course_code(&code)).collect();
            review.course_code = first;
            expanded.push(review);
            expanded.extend(extras);
        }
        expanded
    }

    /// Drain accumulated degradation events.
    pub fn drain_degradation_events(&mut self) -> Vec<DegradationEvent> {
        std::mem::take(&mut self.events)
    }

    /// The embedding provider behind the gateway.
    pub fn embedding_provider_name(&self) -> &str {
        self.gateway.provider_name()
    }
}
