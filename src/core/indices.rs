use hashbrown::HashMap;

use crate::movie::MovieRecord;

/// Case-folded title used as the snapshot key.
pub type TitleKey = String;

pub type TitleIndex = HashMap<TitleKey, MovieRecord>;

pub fn title_key(title: &str) -> TitleKey {
    title.trim().to_lowercase()
}
