use serde::{
    Deserialize,
    Serialize,
};

use crate::abilities::{
    Condition,
    Effect,
    EffectTag,
    HookCategory,
};

/// A single conditional behavior of an ability.
///
/// The tags of an attribute are computed once from its effect, so selecting attributes by tag
/// never inspects the effect itself.
#[derive(Debug, Clone)]
pub struct Attribute {
    effect: Effect,
    show_ability: bool,
    extra_condition: Option<Condition>,
    tags: Vec<EffectTag>,
}

impl Attribute {
    /// Creates a new attribute with the default presentation of its effect.
    pub fn new(effect: Effect) -> Self {
        let show_ability = effect.show_ability();
        let tags = effect.tags();
        Self {
            effect,
            show_ability,
            extra_condition: None,
            tags,
        }
    }

    /// Gates the attribute behind an additional condition on its owner.
    pub fn with_extra_condition(mut self, condition: Condition) -> Self {
        self.extra_condition = Some(condition);
        self
    }

    /// Overrides whether the ability banner is shown when the attribute applies.
    pub fn with_show_ability(mut self, show_ability: bool) -> Self {
        self.show_ability = show_ability;
        self
    }

    pub fn effect(&self) -> &Effect {
        &self.effect
    }

    pub fn hook(&self) -> HookCategory {
        self.effect.hook()
    }

    pub fn show_ability(&self) -> bool {
        self.show_ability
    }

    pub fn extra_condition(&self) -> Option<&Condition> {
        self.extra_condition.as_ref()
    }

    pub fn tags(&self) -> &[EffectTag] {
        &self.tags
    }

    /// Is the attribute selected by the tag?
    pub fn has_tag(&self, tag: EffectTag) -> bool {
        self.tags.contains(&tag)
    }
}

/// Data for an ability attribute, as it appears in configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributeData {
    #[serde(flatten)]
    pub effect: Effect,
    /// Overrides whether the ability banner is shown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_ability: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_condition: Option<Condition>,
}

impl From<AttributeData> for Attribute {
    fn from(value: AttributeData) -> Self {
        let mut attribute = Attribute::new(value.effect);
        if let Some(show_ability) = value.show_ability {
            attribute = attribute.with_show_ability(show_ability);
        }
        if let Some(condition) = value.extra_condition {
            attribute = attribute.with_extra_condition(condition);
        }
        attribute
    }
}
