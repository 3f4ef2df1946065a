use serde::{Deserialize, Serialize};

use crate::models::ChartFileInfo;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskAITemplate {
    pub id: String,
    pub title: String,
    pub prompt: String,
}

/// One uploaded chart as it is described to the model
#[derive(Debug, Clone)]
pub struct ChartContextData {
    /// 1-based position of the image in the request
    pub index: usize,
    pub info: ChartFileInfo,
}

impl ChartContextData {
    pub fn from_filenames<S: AsRef<str>>(filenames: &[S]) -> Vec<Self> {
        filenames
            .iter()
            .enumerate()
            .map(|(i, name)| Self {
                index: i + 1,
                info: ChartFileInfo::parse(name.as_ref()),
            })
            .collect()
    }
}
