//! ClusteringEngine: similarity matrix → partition → labels → quality, for one board.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use std::time::Instant;

use cardmap_core::config::{ClusteringConfig, EngineConfig};
use cardmap_core::constants::{DOMINANT_ATTRIBUTE_COUNT, RECOMMENDED_MAX_INLINE_CARDS};
use cardmap_core::errors::CardmapResult;
use cardmap_core::models::card::normalize_tags;
use cardmap_core::models::{
    Card, Centroid, ClusteringResult, LabelStrategy, NetworkEdge, NetworkNode, Partition,
    SimilarityMatrix, SmartCluster,
};
use cardmap_core::traits::{ClusteringEvent, IClusteringObserver, NoopObserver};
use cardmap_labeling::LabelGenerator;
use cardmap_similarity::{DistanceModel, RelationshipGraph, SimilarityEngine};
use tracing::{debug, info, warn};

use crate::quality::{assess_quality, ClusterQualityEvaluator};
use crate::registry::clusterer_for;

/// The clustering entry point.
///
/// Holds no per-board state; `run` is a pure function of its inputs apart from
/// the events it hands to the observer.
pub struct ClusteringEngine {
    similarity: SimilarityEngine,
    labels: LabelGenerator,
    evaluator: ClusterQualityEvaluator,
    observer: Arc<dyn IClusteringObserver>,
}

impl ClusteringEngine {
    pub fn new(similarity: SimilarityEngine, labels: LabelGenerator) -> Self {
        Self {
            similarity,
            labels,
            evaluator: ClusterQualityEvaluator::new(),
            observer: Arc::new(NoopObserver),
        }
    }

    /// Build the similarity engine and label generator from configuration.
    pub fn from_config(config: &EngineConfig) -> CardmapResult<Self> {
        config.validate()?;
        Ok(Self::new(
            SimilarityEngine::from_config(&config.similarity),
            LabelGenerator::from_config(&config.labeling)?,
        ))
    }

    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn IClusteringObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn similarity_engine(&self) -> &SimilarityEngine {
        &self.similarity
    }

    pub fn label_generator(&self) -> &LabelGenerator {
        &self.labels
    }

    /// Cluster a board.
    ///
    /// When `nodes` is empty one node per card is derived. Nodes without a
    /// matching card are scored from their own title and tags.
    pub fn run(
        &self,
        cards: &[Card],
        nodes: &[NetworkNode],
        edges: &[NetworkEdge],
        config: &ClusteringConfig,
    ) -> CardmapResult<ClusteringResult> {
        let start = Instant::now();
        config.validate()?;
        let clusterer = clusterer_for(config.algorithm)?;
        let algorithm = clusterer.algorithm();

        let nodes: Vec<NetworkNode> = if nodes.is_empty() {
            cards.iter().map(NetworkNode::from_card).collect()
        } else {
            nodes.to_vec()
        };
        let cards = resolve_cards(cards, &nodes);
        let n = nodes.len();

        self.observer.observe(&ClusteringEvent::RunStarted {
            algorithm,
            node_count: n,
        });
        info!(algorithm = algorithm.as_str(), nodes = n, edges = edges.len(), "clustering started");
        if exceeds_inline_size(n) {
            warn!(
                nodes = n,
                recommended_max = RECOMMENDED_MAX_INLINE_CARDS,
                "board is large for inline clustering; pairwise work grows quadratically"
            );
        }

        if n == 0 {
            let mut result = ClusteringResult::empty(algorithm, Default::default());
            result.parameters.min_cluster_size = config.min_cluster_size;
            result.parameters.max_cluster_size = config.max_cluster_size;
            result.parameters.similarity_threshold = config.similarity_threshold;
            self.complete(&result, start);
            return Ok(result);
        }

        let graph = RelationshipGraph::build(&nodes, edges);
        if graph.ignored_edges() > 0 {
            debug!(ignored = graph.ignored_edges(), "edges ignored while building graph");
        }
        let similarity = DistanceModel::new(&self.similarity, &config.signals)
            .similarity_matrix(&cards, &nodes, &graph)?;
        self.observer.observe(&ClusteringEvent::MatrixBuilt {
            node_count: n,
            mean_similarity: similarity.mean_off_diagonal(),
        });

        let distances = similarity.to_distances();
        let partition = clusterer.cluster(&distances, config, self.observer.as_ref())?;

        let clusters = self.smart_clusters(&partition, &cards, &nodes, &similarity);
        let quality = self
            .evaluator
            .evaluate_clusters(&clusters, partition.outliers.len());

        let assessment = assess_quality(&quality);
        if !assessment.overall_pass {
            debug!(issues = ?assessment.issues, "clustering quality below minimum");
        }

        let outlier_scores: BTreeMap<String, f64> = if partition.outlier_scores.len() == n {
            nodes
                .iter()
                .zip(&partition.outlier_scores)
                .map(|(node, &score)| (node.id.clone(), score))
                .collect()
        } else {
            BTreeMap::new()
        };

        let mut processing = partition.processing;
        processing.elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

        let result = ClusteringResult {
            clusters,
            outliers: partition.outliers.iter().map(|&i| nodes[i].id.clone()).collect(),
            quality,
            algorithm,
            parameters: partition.parameters,
            outlier_scores,
            processing,
        };
        self.complete(&result, start);
        Ok(result)
    }

    fn smart_clusters(
        &self,
        partition: &Partition,
        cards: &[Card],
        nodes: &[NetworkNode],
        similarity: &SimilarityMatrix,
    ) -> Vec<SmartCluster> {
        partition
            .clusters
            .iter()
            .enumerate()
            .map(|(i, cluster)| {
                let id = format!("cluster-{i}");
                let members: Vec<&Card> = cluster.members.iter().map(|&m| &cards[m]).collect();
                let label = self.labels.generate(&members);
                if label.strategy == LabelStrategy::ErrorFallback {
                    self.observer.observe(&ClusteringEvent::LabelFallback {
                        cluster_id: id.clone(),
                        reason: label.reasoning.clone(),
                    });
                }

                SmartCluster {
                    node_ids: cluster.members.iter().map(|&m| nodes[m].id.clone()).collect(),
                    centroid: centroid(nodes, &cluster.members),
                    cohesion: self.evaluator.cohesion(&cluster.members, similarity),
                    stability: cluster.stability,
                    dominant_tags: dominant_tags(cards, nodes, &cluster.members),
                    dominant_types: top_counts(
                        members
                            .iter()
                            .map(|c| c.column_type.trim().to_lowercase())
                            .filter(|t| !t.is_empty()),
                    ),
                    label,
                    id,
                }
            })
            .collect()
    }

    fn complete(&self, result: &ClusteringResult, start: Instant) {
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
        self.observer.observe(&ClusteringEvent::RunCompleted {
            algorithm: result.algorithm,
            clusters: result.clusters.len(),
            outliers: result.outliers.len(),
            coverage_ratio: result.quality.coverage_ratio,
            avg_cohesion: result.quality.avg_cohesion,
            elapsed_ms,
        });
        info!(
            algorithm = result.algorithm.as_str(),
            clusters = result.clusters.len(),
            outliers = result.outliers.len(),
            coverage = result.quality.coverage_ratio,
            cohesion = result.quality.avg_cohesion,
            elapsed_ms,
            "clustering complete"
        );
    }
}

fn exceeds_inline_size(node_count: usize) -> bool {
    node_count > RECOMMENDED_MAX_INLINE_CARDS
}

/// One card per node, in node order.
fn resolve_cards(cards: &[Card], nodes: &[NetworkNode]) -> Vec<Card> {
    let by_id: HashMap<&str, &Card> = cards.iter().map(|c| (c.id.as_str(), c)).collect();
    nodes
        .iter()
        .map(|node| match by_id.get(node.id.as_str()) {
            Some(card) => (*card).clone(),
            None => node.to_card(),
        })
        .collect()
}

fn centroid(nodes: &[NetworkNode], members: &[usize]) -> Centroid {
    if members.is_empty() {
        return Centroid::default();
    }
    let count = members.len() as f64;
    let (x, y) = members
        .iter()
        .fold((0.0, 0.0), |(x, y), &m| (x + nodes[m].x, y + nodes[m].y));
    Centroid {
        x: x / count,
        y: y / count,
    }
}

fn dominant_tags(cards: &[Card], nodes: &[NetworkNode], members: &[usize]) -> Vec<String> {
    top_counts(members.iter().flat_map(|&m| {
        let mut tags = nodes[m].tags.clone();
        tags.extend(cards[m].tags.iter().cloned());
        normalize_tags(&tags)
    }))
}

/// The most frequent values, most frequent first, ties alphabetical.
fn top_counts(values: impl Iterator<Item = String>) -> Vec<String> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for v in values {
        *counts.entry(v).or_default() += 1;
    }
    let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked
        .into_iter()
        .take(DOMINANT_ATTRIBUTE_COUNT)
        .map(|(v, _)| v)
        .collect()
}
