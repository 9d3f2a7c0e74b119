/// Rank and trait values of one item, as stored in the rarity table.
///
/// Values are kept as text; `rank` is parsed only when ranking.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RarityRecord {
    pub rank: Option<String>,
    pub background: Option<String>,
    pub skin: Option<String>,
    pub hair: Option<String>,
    pub mouth: Option<String>,
    pub eyes: Option<String>,
    pub eyebrows: Option<String>,
    pub clothes: Option<String>,
    pub head_accessory: Option<String>,
    pub face_accessory: Option<String>,
    pub glasses: Option<String>,
}

impl RarityRecord {
    /// Trait values in report column order, rank excluded.
    pub fn traits(&self) -> [Option<&str>; 10] {
        [
            self.background.as_deref(),
            self.skin.as_deref(),
            self.hair.as_deref(),
            self.mouth.as_deref(),
            self.eyes.as_deref(),
            self.eyebrows.as_deref(),
            self.clothes.as_deref(),
            self.head_accessory.as_deref(),
            self.face_accessory.as_deref(),
            self.glasses.as_deref(),
        ]
    }
}
