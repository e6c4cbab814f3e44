//! Default content a freshly created project starts with.
//!
//! Every project begins with one chapter card, one plot card and one
//! character so the editor never opens onto an empty board.

use crate::model::{Location, NewCharacter, NewPlot, World};

pub const WORLD_TITLE: &str = "Untitled world";
pub const WORLD_DESCRIPTION: &str = "Describe the era, places and rules of your story's world.";

pub const CHAPTER_SITUATION: &str = "Chapter 1";
pub const CHAPTER_LOCATION_TITLE: &str = "Where it begins";
pub const CHAPTER_LOCATION_DESCRIPTION: &str =
    "The place your first chapter opens in. Click the card to edit it.";
pub const CHAPTER_LOCATION_IMAGE: &str = "/images/default-location.png";

pub const PLOT_SITUATION: &str = "Something happens that sets the story in motion.";
pub const PLOT_LOCATION_TITLE: &str = "First scene";
pub const PLOT_LOCATION_DESCRIPTION: &str = "Describe where this scene takes place.";

pub const CHARACTER_NAME: &str = "Protagonist";
pub const CHARACTER_ROLE: &str = "Main character";
pub const CHARACTER_SEX: &str = "Unknown";
pub const CHARACTER_AGE: &str = "Unknown";
pub const CHARACTER_APPEARANCE: &str = "What does your hero look like?";
pub const CHARACTER_PERSONALITY: &str = "What drives your hero?";
pub const CHARACTER_ETC: &str = "Anything else worth remembering.";
pub const CHARACTER_IMAGE: &str = "/images/default-character.png";

/// World used when a create request does not provide one.
pub fn default_world() -> World {
    World {
        title: WORLD_TITLE.to_string(),
        description: WORLD_DESCRIPTION.to_string(),
    }
}

/// The time-anchored chapter card placed first in every new project.
pub fn chapter_card() -> NewPlot {
    NewPlot {
        is_time_flag: true,
        situation: CHAPTER_SITUATION.to_string(),
        location: Location {
            title: CHAPTER_LOCATION_TITLE.to_string(),
            description: CHAPTER_LOCATION_DESCRIPTION.to_string(),
            image_url: CHAPTER_LOCATION_IMAGE.to_string(),
        },
    }
}

/// The regular plot card following the chapter card.
///
/// Shares the chapter's location image; there is no separate plot image.
pub fn plot_card() -> NewPlot {
    NewPlot {
        is_time_flag: false,
        situation: PLOT_SITUATION.to_string(),
        location: Location {
            title: PLOT_LOCATION_TITLE.to_string(),
            description: PLOT_LOCATION_DESCRIPTION.to_string(),
            image_url: CHAPTER_LOCATION_IMAGE.to_string(),
        },
    }
}

pub fn default_character() -> NewCharacter {
    NewCharacter {
        name: CHARACTER_NAME.to_string(),
        role: CHARACTER_ROLE.to_string(),
        sex: CHARACTER_SEX.to_string(),
        age: CHARACTER_AGE.to_string(),
        appearance: CHARACTER_APPEARANCE.to_string(),
        personality: CHARACTER_PERSONALITY.to_string(),
        etc: CHARACTER_ETC.to_string(),
        image_url: CHARACTER_IMAGE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn chapter_card_is_time_flagged() {
        assert!(chapter_card().is_time_flag);
        assert!(!plot_card().is_time_flag);
    }

    #[test]
    fn plot_card_reuses_chapter_image() {
        assert_eq!(plot_card().location.image_url, CHAPTER_LOCATION_IMAGE);
    }

    #[test]
    fn default_world_is_valid() {
        assert!(default_world().validate().is_ok());
    }
}
