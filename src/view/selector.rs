/// Slider over the configured model keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSelector {
    models: Vec<String>,
    index: usize,
}

impl ModelSelector {
    pub fn new(models: &[String], initial: Option<&str>) -> Self {
        let index = initial
            .and_then(|key| models.iter().position(|model| model == key))
            .unwrap_or(0);
        Self {
            models: models.to_vec(),
            index,
        }
    }

    pub fn models(&self) -> &[String] {
        &self.models
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn selected(&self) -> Option<&str> {
        self.models.get(self.index).map(String::as_str)
    }

    /// Moves the slider, clamping to the ends of the model list.
    pub fn set_index(&mut self, index: usize) {
        self.index = index.min(self.models.len().saturating_sub(1));
    }

    /// Selects `key`; returns false and keeps the current model when it is unknown.
    pub fn select(&mut self, key: &str) -> bool {
        match self.models.iter().position(|model| model == key) {
            Some(index) => {
                self.index = index;
                true
            }
            None => false,
        }
    }
}
