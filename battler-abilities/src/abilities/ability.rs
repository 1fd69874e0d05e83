use anyhow::Result;
use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::{
    abilities::{
        Attribute,
        AttributeData,
        Condition,
        EffectTag,
    },
    battle::{
        Battle,
        MonHandle,
    },
    common::{
        FastHashSet,
        Id,
        Identifiable,
    },
};

/// An innate ability of a Mon: a named bundle of conditional behaviors.
///
/// Abilities are built once when the catalog is constructed and shared read-only afterwards.
#[derive(Debug, Clone)]
pub struct Ability {
    pub id: Id,
    pub name: String,
    pub description: String,
    /// The generation the ability was introduced in.
    pub generation: u8,
    /// The ability keeps responding to hooks after its owner faints.
    pub bypass_faint: bool,
    /// The ability can be ignored by moves and abilities that ignore abilities.
    pub ignorable: bool,
    /// Attributes, in resolution order.
    pub attributes: Vec<Attribute>,
    /// Conditions that must all hold for any attribute to apply.
    pub conditions: Vec<Condition>,
}

impl Ability {
    /// The ID of the empty ability.
    pub const NONE: Id = Id::from_known("none");

    /// Creates a builder for a new ability.
    pub fn builder<S>(id: Id, name: S) -> AbilityBuilder
    where
        S: Into<String>,
    {
        AbilityBuilder::new(id, name)
    }

    /// Creates an ability from configuration data.
    pub fn from_data(id: Id, data: AbilityData) -> Self {
        Self {
            id,
            name: data.name,
            description: data.description,
            generation: data.generation,
            bypass_faint: data.flags.contains(&AbilityFlag::BypassFaint),
            ignorable: data.flags.contains(&AbilityFlag::Ignorable),
            attributes: data.attributes.into_iter().map(Attribute::from).collect(),
            conditions: data.conditions,
        }
    }

    /// Attributes selected by the tag, in resolution order.
    pub fn attributes_with_tag(&self, tag: EffectTag) -> impl Iterator<Item = &Attribute> {
        self.attributes
            .iter()
            .filter(move |attribute| attribute.has_tag(tag))
    }

    /// Does the ability have any attribute selected by the tag?
    pub fn has_tag(&self, tag: EffectTag) -> bool {
        self.attributes_with_tag(tag).next().is_some()
    }

    /// Is this the empty ability?
    pub fn is_none(&self) -> bool {
        self.id == Self::NONE
    }

    /// Checks the conditions of the whole ability for the Mon.
    pub fn conditions_hold(&self, battle: &dyn Battle, mon: MonHandle) -> Result<bool> {
        for condition in &self.conditions {
            if !condition.evaluate(battle, mon)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

impl Identifiable for Ability {
    fn id(&self) -> &Id {
        &self.id
    }
}

/// Builder for an [`Ability`].
pub struct AbilityBuilder {
    ability: Ability,
}

impl AbilityBuilder {
    fn new<S>(id: Id, name: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            ability: Ability {
                id,
                name: name.into(),
                description: String::new(),
                generation: 0,
                bypass_faint: false,
                ignorable: false,
                attributes: Vec::new(),
                conditions: Vec::new(),
            },
        }
    }

    pub fn with_description<S>(mut self, description: S) -> Self
    where
        S: Into<String>,
    {
        self.ability.description = description.into();
        self
    }

    pub fn with_generation(mut self, generation: u8) -> Self {
        self.ability.generation = generation;
        self
    }

    /// Appends an attribute.
    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.ability.attributes.push(attribute);
        self
    }

    /// Appends an attribute gated behind an additional condition.
    pub fn with_conditional_attribute(self, condition: Condition, attribute: Attribute) -> Self {
        self.with_attribute(attribute.with_extra_condition(condition))
    }

    /// Adds a condition that gates every attribute of the ability.
    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.ability.conditions.push(condition);
        self
    }

    pub fn bypass_faint(mut self) -> Self {
        self.ability.bypass_faint = true;
        self
    }

    pub fn ignorable(mut self) -> Self {
        self.ability.ignorable = true;
        self
    }

    pub fn build(self) -> Ability {
        self.ability
    }
}

/// Flags on an ability, as they appear in configuration.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum AbilityFlag {
    /// The ability keeps responding to hooks after its owner faints.
    #[string = "BypassFaint"]
    BypassFaint,
    /// The ability can be ignored by moves and abilities that ignore abilities.
    #[string = "Ignorable"]
    Ignorable,
}

/// Data about a particular ability, as it appears in configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbilityData {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub generation: u8,
    #[serde(default)]
    pub flags: FastHashSet<AbilityFlag>,
    /// Attributes, in resolution order.
    #[serde(default)]
    pub attributes: Vec<AttributeData>,
    /// Conditions that must all hold for any attribute to apply.
    #[serde(default)]
    pub conditions: Vec<Condition>,
}
