use crate::*;
use std::path::Path;

/// Child-to-parent table relations read from `child extends parent` lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inheritance {
    relations: Vec<(String, String)>,
}

impl Inheritance {
    /// Lines that are not exactly `<child> extends <parent>` are ignored. A
    /// child listed twice keeps its last parent.
    pub fn parse(text: &str) -> Self {
        let mut relations: Vec<(String, String)> = Vec::new();
        for line in text.lines() {
            let parts: Vec<&str> = line.trim().split(" extends ").collect();
            let [child, parent] = parts[..] else {
                continue;
            };
            match relations.iter_mut().find(|(c, _)| c == child) {
                Some(existing) => existing.1 = parent.to_string(),
                None => relations.push((child.to_string(), parent.to_string())),
            }
        }
        Self { relations }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let inheritance = Self::parse(&text);
        debug!(
            "Loaded {} inheritance relations from {}",
            inheritance.relations.len(),
            path.display()
        );
        Ok(inheritance)
    }

    /// `(child, parent)` pairs in file order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.relations.iter().map(|(c, p)| (c.as_str(), p.as_str()))
    }
}
