//! Host-facing accessors for gear attribute records.
//!
//! The host item system implements [`GearCarrier`] for its item type and binds
//! the named getter/setter pairs below to whatever property mechanism it uses.
//! Getters fall back to the record default when the item does not carry the
//! record; setters are no-ops in that case.

use crate::gear::attributes::{
    AttrValue, EquippedAttributes, GearField, WieldedAttributes, DEFAULT_DAMAGE_DICE,
    DEFAULT_DAMAGE_TYPE, DEFAULT_DURABILITY, DEFAULT_REACH, DEFAULT_WEAPON_CATEGORY,
    DEFAULT_WEAPON_SPEED, DEFAULT_WIELDED_MATERIAL,
};
use crate::gear::errors::GearError;
use crate::gear::store::GearConfigStore;
use crate::gear::tree::Namespace;

/// Capability check for items that may carry gear attribute records.
pub trait GearCarrier {
    fn wielded(&self) -> Option<&WieldedAttributes>;
    fn wielded_mut(&mut self) -> Option<&mut WieldedAttributes>;
    fn equipped(&self) -> Option<&EquippedAttributes>;
    fn equipped_mut(&mut self) -> Option<&mut EquippedAttributes>;

    fn is_wielded(&self) -> bool {
        self.wielded().is_some()
    }

    fn is_equipped(&self) -> bool {
        self.equipped().is_some()
    }
}

// Wielded getters

pub fn wielded_damage_type<T: GearCarrier + ?Sized>(item: &T) -> String {
    item.wielded()
        .map_or(DEFAULT_DAMAGE_TYPE, |w| w.damage_type())
        .to_string()
}

pub fn wielded_weapon_category<T: GearCarrier + ?Sized>(item: &T) -> String {
    item.wielded()
        .map_or(DEFAULT_WEAPON_CATEGORY, |w| w.weapon_category())
        .to_string()
}

pub fn wielded_ranged_type<T: GearCarrier + ?Sized>(item: &T) -> String {
    item.wielded().map_or("", |w| w.ranged_type()).to_string()
}

pub fn wielded_damage_dice<T: GearCarrier + ?Sized>(item: &T) -> String {
    item.wielded()
        .map_or(DEFAULT_DAMAGE_DICE, |w| w.damage_dice())
        .to_string()
}

pub fn wielded_damage_bonus<T: GearCarrier + ?Sized>(item: &T) -> i64 {
    item.wielded().map_or(0, |w| w.damage_bonus())
}

pub fn wielded_hit_bonus<T: GearCarrier + ?Sized>(item: &T) -> i64 {
    item.wielded().map_or(0, |w| w.hit_bonus())
}

pub fn wielded_weapon_speed<T: GearCarrier + ?Sized>(item: &T) -> f64 {
    item.wielded()
        .map_or(DEFAULT_WEAPON_SPEED, |w| w.weapon_speed())
}

pub fn wielded_reach<T: GearCarrier + ?Sized>(item: &T) -> i64 {
    item.wielded().map_or(DEFAULT_REACH, |w| w.reach())
}

pub fn wielded_durability<T: GearCarrier + ?Sized>(item: &T) -> i64 {
    item.wielded()
        .map_or(DEFAULT_DURABILITY, |w| w.durability())
}

pub fn wielded_max_durability<T: GearCarrier + ?Sized>(item: &T) -> i64 {
    item.wielded()
        .map_or(DEFAULT_DURABILITY, |w| w.max_durability())
}

pub fn wielded_material<T: GearCarrier + ?Sized>(item: &T) -> String {
    item.wielded()
        .map_or(DEFAULT_WIELDED_MATERIAL, |w| w.material())
        .to_string()
}

pub fn wielded_special_attacks<T: GearCarrier + ?Sized>(item: &T) -> String {
    item.wielded()
        .map_or("", |w| w.special_attacks())
        .to_string()
}

// Wielded setters

pub fn set_wielded_damage_type<T: GearCarrier + ?Sized>(item: &mut T, value: &str) {
    if let Some(w) = item.wielded_mut() {
        w.set_damage_type(value);
    }
}

pub fn set_wielded_weapon_category<T: GearCarrier + ?Sized>(item: &mut T, value: &str) {
    if let Some(w) = item.wielded_mut() {
        w.set_weapon_category(value);
    }
}

pub fn set_wielded_ranged_type<T: GearCarrier + ?Sized>(item: &mut T, value: &str) {
    if let Some(w) = item.wielded_mut() {
        w.set_ranged_type(value);
    }
}

pub fn set_wielded_damage_dice<T: GearCarrier + ?Sized>(item: &mut T, value: &str) {
    if let Some(w) = item.wielded_mut() {
        w.set_damage_dice(value);
    }
}

pub fn set_wielded_damage_bonus<T: GearCarrier + ?Sized>(item: &mut T, value: i64) {
    if let Some(w) = item.wielded_mut() {
        w.set_damage_bonus(value);
    }
}

pub fn set_wielded_hit_bonus<T: GearCarrier + ?Sized>(item: &mut T, value: i64) {
    if let Some(w) = item.wielded_mut() {
        w.set_hit_bonus(value);
    }
}

pub fn set_wielded_weapon_speed<T: GearCarrier + ?Sized>(item: &mut T, value: f64) {
    if let Some(w) = item.wielded_mut() {
        w.set_weapon_speed(value);
    }
}

pub fn set_wielded_reach<T: GearCarrier + ?Sized>(item: &mut T, value: i64) {
    if let Some(w) = item.wielded_mut() {
        w.set_reach(value);
    }
}

pub fn set_wielded_durability<T: GearCarrier + ?Sized>(item: &mut T, value: i64) {
    if let Some(w) = item.wielded_mut() {
        w.set_durability(value);
    }
}

pub fn set_wielded_max_durability<T: GearCarrier + ?Sized>(item: &mut T, value: i64) {
    if let Some(w) = item.wielded_mut() {
        w.set_max_durability(value);
    }
}

pub fn set_wielded_material<T: GearCarrier + ?Sized>(item: &mut T, value: &str) {
    if let Some(w) = item.wielded_mut() {
        w.set_material(value);
    }
}

pub fn set_wielded_special_attacks<T: GearCarrier + ?Sized>(item: &mut T, value: &str) {
    if let Some(w) = item.wielded_mut() {
        w.set_special_attacks(value);
    }
}

// Equipped getters

pub fn equipped_armor_class<T: GearCarrier + ?Sized>(item: &T) -> i64 {
    item.equipped().map_or(0, |e| e.armor_class())
}

pub fn equipped_enchantment_level<T: GearCarrier + ?Sized>(item: &T) -> i64 {
    item.equipped().map_or(0, |e| e.enchantment_level())
}

pub fn equipped_durability<T: GearCarrier + ?Sized>(item: &T) -> i64 {
    item.equipped()
        .map_or(DEFAULT_DURABILITY, |e| e.durability())
}

pub fn equipped_max_durability<T: GearCarrier + ?Sized>(item: &T) -> i64 {
    item.equipped()
        .map_or(DEFAULT_DURABILITY, |e| e.max_durability())
}

pub fn equipped_material<T: GearCarrier + ?Sized>(item: &T) -> String {
    item.equipped().map_or("", |e| e.material()).to_string()
}

pub fn equipped_special_properties<T: GearCarrier + ?Sized>(item: &T) -> String {
    item.equipped()
        .map_or("", |e| e.special_properties())
        .to_string()
}

// Equipped setters

pub fn set_equipped_armor_class<T: GearCarrier + ?Sized>(item: &mut T, value: i64) {
    if let Some(e) = item.equipped_mut() {
        e.set_armor_class(value);
    }
}

pub fn set_equipped_enchantment_level<T: GearCarrier + ?Sized>(item: &mut T, value: i64) {
    if let Some(e) = item.equipped_mut() {
        e.set_enchantment_level(value);
    }
}

pub fn set_equipped_durability<T: GearCarrier + ?Sized>(item: &mut T, value: i64) {
    if let Some(e) = item.equipped_mut() {
        e.set_durability(value);
    }
}

pub fn set_equipped_max_durability<T: GearCarrier + ?Sized>(item: &mut T, value: i64) {
    if let Some(e) = item.equipped_mut() {
        e.set_max_durability(value);
    }
}

pub fn set_equipped_material<T: GearCarrier + ?Sized>(item: &mut T, value: &str) {
    if let Some(e) = item.equipped_mut() {
        e.set_material(value);
    }
}

pub fn set_equipped_special_properties<T: GearCarrier + ?Sized>(item: &mut T, value: &str) {
    if let Some(e) = item.equipped_mut() {
        e.set_special_properties(value);
    }
}

/// Read any field by name. `None` when the item lacks the record.
pub fn get_attribute<T: GearCarrier + ?Sized>(item: &T, field: GearField) -> Option<AttrValue> {
    match field {
        GearField::Wielded(f) => item.wielded().map(|w| w.get(f)),
        GearField::Equipped(f) => item.equipped().map(|e| e.get(f)),
    }
}

/// Coerce and store any field by name. Returns `Ok(false)` when the item lacks
/// the record (nothing is written).
pub fn set_attribute<T: GearCarrier + ?Sized>(
    item: &mut T,
    field: GearField,
    value: AttrValue,
) -> Result<bool, GearError> {
    match field {
        GearField::Wielded(f) => match item.wielded_mut() {
            Some(w) => w.set(f, value).map(|_| true),
            None => Ok(false),
        },
        GearField::Equipped(f) => match item.equipped_mut() {
            Some(e) => e.set(f, value).map(|_| true),
            None => Ok(false),
        },
    }
}

/// Check a value against the vocabulary that governs `field` in configuration
/// `key`. Fields without a governing vocabulary always pass.
///
/// Setters never call this; callers that want enforcement do so first.
pub fn validate_attribute(
    store: &GearConfigStore,
    key: &str,
    field: GearField,
    value: &str,
) -> Result<(), GearError> {
    let Some(category) = field.category() else {
        return Ok(());
    };
    let namespace = field.namespace();
    if store.is_valid_in(key, namespace, category, value) {
        return Ok(());
    }
    Err(GearError::Validation {
        namespace: namespace.as_str(),
        category: category.as_str(),
        value: value.to_string(),
    })
}

/// The fields of `namespace`, paired with their current value on `item`.
pub fn describe<T: GearCarrier + ?Sized>(item: &T, namespace: Namespace) -> Vec<(&'static str, AttrValue)> {
    use crate::gear::attributes::{EquippedField, WieldedField};
    match namespace {
        Namespace::Wielded => item
            .wielded()
            .map(|w| {
                WieldedField::ALL
                    .into_iter()
                    .map(|f| (f.as_str(), w.get(f)))
                    .collect()
            })
            .unwrap_or_default(),
        Namespace::Equipped => item
            .equipped()
            .map(|e| {
                EquippedField::ALL
                    .into_iter()
                    .map(|f| (f.as_str(), e.get(f)))
                    .collect()
            })
            .unwrap_or_default(),
    }
}
