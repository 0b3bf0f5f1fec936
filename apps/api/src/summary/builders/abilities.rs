use crate::summary::item::SummaryItem;
use crate::summary::registry::{BuilderError, SummaryBuilder};
use crate::summary::state::{DraftOverrides, SummaryState};
use crate::wizard::{Ability, AbilityKind};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AbilityTally {
    pub knowledge: usize,
    pub tech: usize,
    pub skill: usize,
}

impl AbilityTally {
    pub fn count(abilities: &[Ability]) -> Self {
        abilities
            .iter()
            .fold(Self::default(), |mut tally, ability| {
                match ability.kind {
                    AbilityKind::Knowledge => tally.knowledge += 1,
                    AbilityKind::Tech => tally.tech += 1,
                    AbilityKind::Skill => tally.skill += 1,
                }
                tally
            })
    }

    pub fn total(&self) -> usize {
        self.knowledge + self.tech + self.skill
    }

    pub fn describe(&self) -> String {
        format!(
            "Knowledge:{} • Tech:{} • Skills:{}",
            self.knowledge, self.tech, self.skill
        )
    }
}

/// A single row tallying the selected abilities by kind.
/// With nothing selected the row still appears, with every count at zero.
pub struct AbilityCountsBuilder;

impl SummaryBuilder for AbilityCountsBuilder {
    fn build(
        &self,
        state: &SummaryState,
        drafts: Option<&DraftOverrides>,
    ) -> Result<Vec<SummaryItem>, BuilderError> {
        let abilities = drafts
            .and_then(|d| d.abilities.as_deref())
            .unwrap_or(&state.abilities);

        Ok(vec![SummaryItem::row(
            "ability-counts",
            "Abilities",
            AbilityTally::count(abilities).describe(),
        )])
    }
}
