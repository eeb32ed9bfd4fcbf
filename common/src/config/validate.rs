pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

impl<T: Validate> Validate for Vec<T> {
    fn validate(&self) -> Result<(), String> {
        for (index, item) in self.iter().enumerate() {
            item.validate().map_err(|e| format!("item {}: {}", index, e))?;
        }
        Ok(())
    }
}
