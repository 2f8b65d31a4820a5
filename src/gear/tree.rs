//! The fixed two-namespace configuration tree and its default vocabularies.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::gear::category::CategoryList;
use crate::gear::errors::GearError;

/// Top-level grouping of categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Namespace {
    Wielded,
    Equipped,
}

impl Namespace {
    pub const ALL: [Namespace; 2] = [Namespace::Wielded, Namespace::Equipped];

    pub fn as_str(self) -> &'static str {
        match self {
            Namespace::Wielded => "wielded",
            Namespace::Equipped => "equipped",
        }
    }

    /// Categories present in this namespace, in menu order.
    pub fn categories(self) -> &'static [Category] {
        match self {
            Namespace::Wielded => &WIELDED_CATEGORIES,
            Namespace::Equipped => &EQUIPPED_CATEGORIES,
        }
    }

    pub fn has_category(self, category: Category) -> bool {
        self.categories().contains(&category)
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Namespace {
    type Err = GearError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wielded" => Ok(Namespace::Wielded),
            "equipped" => Ok(Namespace::Equipped),
            other => Err(GearError::UnknownField(format!("namespace '{}'", other))),
        }
    }
}

/// Named vocabularies. Not every category exists in every namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    DamageTypes,
    WeaponCategories,
    RangedTypes,
    Materials,
    SpecialProperties,
    SpecialAttacks,
    ArmorTypes,
}

pub const WIELDED_CATEGORIES: [Category; 6] = [
    Category::DamageTypes,
    Category::WeaponCategories,
    Category::RangedTypes,
    Category::Materials,
    Category::SpecialProperties,
    Category::SpecialAttacks,
];

pub const EQUIPPED_CATEGORIES: [Category; 3] = [
    Category::ArmorTypes,
    Category::Materials,
    Category::SpecialProperties,
];

impl Category {
    /// Field name used in the persisted file.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::DamageTypes => "damage_types",
            Category::WeaponCategories => "weapon_categories",
            Category::RangedTypes => "ranged_types",
            Category::Materials => "materials",
            Category::SpecialProperties => "special_properties",
            Category::SpecialAttacks => "special_attacks",
            Category::ArmorTypes => "armor_types",
        }
    }

    /// Plural heading, e.g. "Damage types".
    pub fn title(self) -> &'static str {
        match self {
            Category::DamageTypes => "Damage types",
            Category::WeaponCategories => "Weapon categories",
            Category::RangedTypes => "Ranged types",
            Category::Materials => "Materials",
            Category::SpecialProperties => "Special properties",
            Category::SpecialAttacks => "Special attacks",
            Category::ArmorTypes => "Armor types",
        }
    }

    /// Singular noun used in prompts and feedback, e.g. "damage type".
    pub fn noun(self) -> &'static str {
        match self {
            Category::DamageTypes => "damage type",
            Category::WeaponCategories => "weapon category",
            Category::RangedTypes => "ranged type",
            Category::Materials => "material",
            Category::SpecialProperties => "property",
            Category::SpecialAttacks => "attack",
            Category::ArmorTypes => "armor type",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = GearError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "damage_types" | "damage_type" => Ok(Category::DamageTypes),
            "weapon_categories" | "weapon_category" => Ok(Category::WeaponCategories),
            "ranged_types" | "ranged_type" => Ok(Category::RangedTypes),
            "materials" | "material" => Ok(Category::Materials),
            "special_properties" | "special_property" => Ok(Category::SpecialProperties),
            "special_attacks" | "special_attack" => Ok(Category::SpecialAttacks),
            "armor_types" | "armor_type" => Ok(Category::ArmorTypes),
            _ => Err(GearError::UnknownField(format!("category '{}'", s.trim()))),
        }
    }
}

/// Vocabularies for wielded gear (weapons, tools).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WieldedConfig {
    #[serde(default)]
    pub damage_types: CategoryList,
    #[serde(default)]
    pub weapon_categories: CategoryList,
    #[serde(default)]
    pub ranged_types: CategoryList,
    #[serde(default)]
    pub materials: CategoryList,
    #[serde(default)]
    pub special_properties: CategoryList,
    #[serde(default)]
    pub special_attacks: CategoryList,
}

impl WieldedConfig {
    pub fn with_defaults() -> Self {
        Self {
            damage_types: CategoryList::from_items([
                "slashing",
                "bludgeoning",
                "piercing",
                "fire",
                "cold",
                "acid",
                "lightning",
            ]),
            weapon_categories: CategoryList::from_items(["melee", "ranged", "thrown"]),
            ranged_types: CategoryList::from_items(["bow", "crossbow", "sling", "thrown", "firearm"]),
            materials: CategoryList::from_items([
                "steel",
                "iron",
                "bronze",
                "silver",
                "gold",
                "mithril",
                "adamantine",
                "wood",
                "bone",
                "crystal",
            ]),
            special_properties: CategoryList::from_items([
                "magical", "blessed", "cursed", "flaming", "frost", "shock",
            ]),
            special_attacks: CategoryList::from_items(["vorpal", "sharpness", "speed", "accuracy"]),
        }
    }
}

/// Vocabularies for equipped gear (armor, accessories).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquippedConfig {
    #[serde(default)]
    pub armor_types: CategoryList,
    #[serde(default)]
    pub materials: CategoryList,
    #[serde(default)]
    pub special_properties: CategoryList,
}

impl EquippedConfig {
    pub fn with_defaults() -> Self {
        Self {
            armor_types: CategoryList::from_items(["light", "medium", "heavy", "shield"]),
            materials: CategoryList::from_items([
                "leather",
                "chainmail",
                "plate",
                "cloth",
                "dragonscale",
            ]),
            special_properties: CategoryList::from_items([
                "magical",
                "blessed",
                "cursed",
                "protection",
                "resistance",
            ]),
        }
    }
}

/// One named configuration: both namespaces and all of their vocabularies.
///
/// `Default` yields empty lists (what a bare persisted record decodes to);
/// [`ConfigTree::with_defaults`] yields the stock vocabularies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigTree {
    #[serde(default)]
    pub wielded: WieldedConfig,
    #[serde(default)]
    pub equipped: EquippedConfig,
}

impl ConfigTree {
    pub fn with_defaults() -> Self {
        Self {
            wielded: WieldedConfig::with_defaults(),
            equipped: EquippedConfig::with_defaults(),
        }
    }

    /// Look up a vocabulary. `None` when the category does not belong to the namespace.
    pub fn list(&self, namespace: Namespace, category: Category) -> Option<&CategoryList> {
        match (namespace, category) {
            (Namespace::Wielded, Category::DamageTypes) => Some(&self.wielded.damage_types),
            (Namespace::Wielded, Category::WeaponCategories) => {
                Some(&self.wielded.weapon_categories)
            }
            (Namespace::Wielded, Category::RangedTypes) => Some(&self.wielded.ranged_types),
            (Namespace::Wielded, Category::Materials) => Some(&self.wielded.materials),
            (Namespace::Wielded, Category::SpecialProperties) => {
                Some(&self.wielded.special_properties)
            }
            (Namespace::Wielded, Category::SpecialAttacks) => Some(&self.wielded.special_attacks),
            (Namespace::Equipped, Category::ArmorTypes) => Some(&self.equipped.armor_types),
            (Namespace::Equipped, Category::Materials) => Some(&self.equipped.materials),
            (Namespace::Equipped, Category::SpecialProperties) => {
                Some(&self.equipped.special_properties)
            }
            _ => None,
        }
    }

    pub fn list_mut(
        &mut self,
        namespace: Namespace,
        category: Category,
    ) -> Option<&mut CategoryList> {
        match (namespace, category) {
            (Namespace::Wielded, Category::DamageTypes) => Some(&mut self.wielded.damage_types),
            (Namespace::Wielded, Category::WeaponCategories) => {
                Some(&mut self.wielded.weapon_categories)
            }
            (Namespace::Wielded, Category::RangedTypes) => Some(&mut self.wielded.ranged_types),
            (Namespace::Wielded, Category::Materials) => Some(&mut self.wielded.materials),
            (Namespace::Wielded, Category::SpecialProperties) => {
                Some(&mut self.wielded.special_properties)
            }
            (Namespace::Wielded, Category::SpecialAttacks) => {
                Some(&mut self.wielded.special_attacks)
            }
            (Namespace::Equipped, Category::ArmorTypes) => Some(&mut self.equipped.armor_types),
            (Namespace::Equipped, Category::Materials) => Some(&mut self.equipped.materials),
            (Namespace::Equipped, Category::SpecialProperties) => {
                Some(&mut self.equipped.special_properties)
            }
            _ => None,
        }
    }

    /// True iff `value` is currently a member of the named vocabulary.
    pub fn is_valid(&self, namespace: Namespace, category: Category, value: &str) -> bool {
        self.list(namespace, category)
            .map(|list| list.contains(value))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_wielded_materials_match_stock_vocabulary() {
        let tree = ConfigTree::with_defaults();
        assert_eq!(
            tree.wielded.materials.items(),
            &[
                "steel",
                "iron",
                "bronze",
                "silver",
                "gold",
                "mithril",
                "adamantine",
                "wood",
                "bone",
                "crystal"
            ]
        );
        assert_eq!(tree.wielded.damage_types.len(), 7);
        assert_eq!(tree.equipped.armor_types.items(), &["light", "medium", "heavy", "shield"]);
    }

    #[test]
    fn list_rejects_foreign_categories() {
        let tree = ConfigTree::with_defaults();
        assert!(tree.list(Namespace::Equipped, Category::DamageTypes).is_none());
        assert!(tree.list(Namespace::Wielded, Category::ArmorTypes).is_none());
        for ns in Namespace::ALL {
            for cat in ns.categories() {
                assert!(tree.list(ns, *cat).is_some(), "{}/{}", ns, cat);
            }
        }
    }

    #[test]
    fn is_valid_checks_live_membership() {
        let mut tree = ConfigTree::with_defaults();
        assert!(tree.is_valid(Namespace::Wielded, Category::Materials, "mithril"));
        assert!(!tree.is_valid(Namespace::Equipped, Category::Materials, "mithril"));
        assert!(!tree.is_valid(Namespace::Equipped, Category::DamageTypes, "fire"));

        tree.list_mut(Namespace::Wielded, Category::Materials)
            .unwrap()
            .remove("mithril");
        assert!(!tree.is_valid(Namespace::Wielded, Category::Materials, "mithril"));
    }

    #[test]
    fn missing_lists_decode_as_empty() {
        let json = r#"{"wielded":{"materials":[{"name":"obsidian"}]}}"#;
        let tree: ConfigTree = serde_json::from_str(json).unwrap();
        assert_eq!(tree.wielded.materials.items(), &["obsidian"]);
        assert!(tree.wielded.damage_types.is_empty());
        assert!(tree.equipped.armor_types.is_empty());
    }

    #[test]
    fn parses_names_loosely() {
        assert_eq!("Wielded".parse::<Namespace>().unwrap(), Namespace::Wielded);
        assert_eq!(
            "damage-types".parse::<Category>().unwrap(),
            Category::DamageTypes
        );
        assert_eq!("material".parse::<Category>().unwrap(), Category::Materials);
        assert!("weapons".parse::<Category>().is_err());
    }
}
