#[cfg(test)]
#[path = "plant_test.rs"]
mod tests;

use serde::Deserialize;
use serde::Serialize;

use super::lenient;

pub const LOADING_TEXT: &str = "Cargando plantas...";
pub const EMPTY_TEXT: &str = "No hay plantas registradas.";

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plant {
    #[serde(
        default,
        deserialize_with = "lenient::optional_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub plant_id: Option<u64>,
    pub name: String,
    pub species: String,
    pub status: String,
}

impl Plant {
    pub fn new(name: &str, species: &str, status: &str) -> Plant {
        return Plant {
            plant_id: None,
            name: name.to_string(),
            species: species.to_string(),
            status: status.to_string(),
        };
    }

    pub fn card_fields(&self) -> Vec<String> {
        return vec![
            format!("Nombre: {}", self.name),
            format!("Especie: {}", self.species),
            format!("Estado: {}", self.status),
        ];
    }

    /// Renders the plant as a bordered card exactly `width` characters wide.
    /// Fields that don't fit are cut short.
    pub fn card_lines(&self, width: usize) -> Vec<String> {
        let inner = width.saturating_sub(4);
        let horizontal = "─".repeat(width.saturating_sub(2));

        let mut lines = vec![format!("╭{horizontal}╮")];
        for field in self.card_fields() {
            let text = field.chars().take(inner).collect::<String>();
            lines.push(format!("│ {text:<inner$} │"));
        }
        lines.push(format!("╰{horizontal}╯"));

        return lines;
    }
}

/// What the home screen knows about the user's plants. `Loaded` with an empty
/// list is a successful answer and is kept apart from `Loading`.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub enum PlantList {
    #[default]
    Loading,
    Loaded(Vec<Plant>),
}

impl PlantList {
    pub fn plants(&self) -> &[Plant] {
        match self {
            PlantList::Loading => return &[],
            PlantList::Loaded(plants) => return plants,
        }
    }

    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            PlantList::Loading => return Some(LOADING_TEXT),
            PlantList::Loaded(plants) if plants.is_empty() => return Some(EMPTY_TEXT),
            PlantList::Loaded(_) => return None,
        }
    }

    pub fn card_lines(&self, width: usize) -> Vec<String> {
        return self
            .plants()
            .iter()
            .flat_map(|plant| {
                return plant.card_lines(width);
            })
            .collect();
    }
}
