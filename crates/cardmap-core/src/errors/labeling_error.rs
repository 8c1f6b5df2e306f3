/// Label generation errors. Never escape the label generator.
#[derive(Debug, thiserror::Error)]
pub enum LabelingError {
    #[error("cannot label an empty cluster")]
    EmptyCluster,

    #[error("dictionary parse failed: {reason}")]
    DictionaryParse { reason: String },
}
