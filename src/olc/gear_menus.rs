//! The gear configuration editor: root menu, one summary menu per namespace and
//! one add/remove leaf per category list.

use std::collections::HashMap;

use log::info;

use crate::gear::category::CategoryList;
use crate::gear::store::{GearConfigStore, DEFAULT_CONFIG_KEY};
use crate::gear::tree::{Category, Namespace};
use crate::logutil::escape_log;
use crate::olc::engine::{Choice, MenuSet, OlcEngine, DEFAULT_QUIT_KEY};
use crate::olc::session::OlcSession;
use crate::validation::validate_category_entry;

pub const DEFAULT_LINE_WIDTH: usize = 78;
pub const DEFAULT_PREVIEW_ITEMS: usize = 5;

pub const PROMPT_ADD: u8 = 1;
pub const PROMPT_REMOVE: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GearMenuId {
    Root,
    Namespace(Namespace),
    Category(Namespace, Category),
}

/// Menu registry for one configuration key of a [`GearConfigStore`].
#[derive(Debug, Clone)]
pub struct GearMenus {
    key: String,
    line_width: usize,
    preview_items: usize,
    quit_key: String,
}

impl Default for GearMenus {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIG_KEY)
    }
}

impl GearMenus {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            line_width: DEFAULT_LINE_WIDTH,
            preview_items: DEFAULT_PREVIEW_ITEMS,
            quit_key: DEFAULT_QUIT_KEY.to_string(),
        }
    }

    pub fn with_line_width(mut self, width: usize) -> Self {
        self.line_width = width;
        self
    }

    pub fn with_preview_items(mut self, count: usize) -> Self {
        self.preview_items = count;
        self
    }

    /// Only changes the label shown in menus; the engine owns the actual key.
    pub fn with_quit_label(mut self, key: impl Into<String>) -> Self {
        self.quit_key = key.into().trim().to_string();
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Build an engine rooted at the main menu, quitting on `quit_key`.
    pub fn into_engine(self) -> OlcEngine<GearConfigStore, GearMenus> {
        let quit_key = self.quit_key.clone();
        OlcEngine::new(self, GearMenuId::Root).with_quit_key(quit_key)
    }

    fn banner(&self, title: &str) -> String {
        let rule = "=".repeat(self.line_width);
        format!("\n{}\n{}\n{}\n\n", rule, title, rule)
    }

    fn quit_line(&self, label: &str) -> String {
        format!("\n{:>2}) {}\n", self.quit_key, label)
    }

    fn render_root(&self) -> String {
        let mut out = self.banner("Gear Configuration Editor");
        out.push_str(&format!("{:>2}) Edit wielded item configuration\n", 1));
        out.push_str(&format!("{:>2}) Edit equipped item configuration\n", 2));
        out.push_str(&self.quit_line("Quit"));
        out
    }

    fn render_namespace(&self, store: &GearConfigStore, ns: Namespace) -> String {
        let title = format!("{} Item Configuration", capitalize(ns.as_str()));
        let mut out = self.banner(&title);
        if store.get(&self.key).is_none() {
            out.push_str(&format!("Configuration '{}' not found.\n\n", self.key));
        }
        for (idx, category) in ns.categories().iter().enumerate() {
            let empty = CategoryList::new();
            let list = lookup(store, &self.key, ns, *category).unwrap_or(&empty);
            out.push_str(&format!(
                "{:>2}) {} ({}): {}\n",
                idx + 1,
                category.title(),
                list.len(),
                list.preview(self.preview_items)
            ));
        }
        out.push_str(&self.quit_line("Return to main menu"));
        out
    }

    fn render_category(&self, store: &GearConfigStore, ns: Namespace, category: Category) -> String {
        let mut out = self.banner(&format!(
            "{} {} Configuration",
            capitalize(ns.as_str()),
            title_case(category.title())
        ));
        let empty = CategoryList::new();
        let list = lookup(store, &self.key, ns, category).unwrap_or(&empty);
        out.push_str(&format!(
            "Current {} ({}):\n",
            category.title().to_lowercase(),
            list.len()
        ));
        out.push_str(&format_tabular_list(list.items(), None, self.line_width));
        out.push_str(&format!("{:>2}) Add {}\n", 1, category.noun()));
        out.push_str(&format!("{:>2}) Remove {}\n", 2, category.noun()));
        out.push_str(&self.quit_line(&format!("Return to {} menu", ns.as_str())));
        out
    }

    fn apply_line(
        &self,
        store: &mut GearConfigStore,
        session: &mut dyn OlcSession,
        ns: Namespace,
        category: Category,
        prompt_id: u8,
        line: &str,
    ) -> bool {
        let noun = category.noun();
        if line.trim().is_empty() {
            return false;
        }
        let Some(list) = store
            .get_mut(&self.key)
            .and_then(|tree| tree.list_mut(ns, category))
        else {
            session.send(&format!("Configuration '{}' not found.\n", self.key));
            return false;
        };

        match prompt_id {
            PROMPT_ADD => {
                let entry = match validate_category_entry(line) {
                    Ok(entry) => entry,
                    Err(e) => {
                        session.send(&format!("Invalid {}: {}.\n", noun, e));
                        return false;
                    }
                };
                if list.add(entry.as_str()) {
                    info!(
                        "gear config '{}': added {} {} '{}'",
                        self.key,
                        ns,
                        category,
                        escape_log(&entry)
                    );
                    session.send(&format!("Added {}: {}\n", noun, entry));
                    true
                } else {
                    session.send(&format!("{} '{}' already exists.\n", capitalize(noun), entry));
                    false
                }
            }
            PROMPT_REMOVE => {
                let entry = line.trim();
                if list.remove(entry) {
                    info!(
                        "gear config '{}': removed {} {} '{}'",
                        self.key,
                        ns,
                        category,
                        escape_log(entry)
                    );
                    session.send(&format!("Removed {}: {}\n", noun, entry));
                    true
                } else {
                    session.send(&format!("{} '{}' not found.\n", capitalize(noun), entry));
                    false
                }
            }
            _ => false,
        }
    }
}

impl MenuSet<GearConfigStore> for GearMenus {
    type Id = GearMenuId;

    fn render(&self, id: GearMenuId, store: &GearConfigStore, session: &mut dyn OlcSession) {
        let text = match id {
            GearMenuId::Root => self.render_root(),
            GearMenuId::Namespace(ns) => self.render_namespace(store, ns),
            GearMenuId::Category(ns, category) => self.render_category(store, ns, category),
        };
        session.send(&text);
    }

    fn dispatch(
        &self,
        id: GearMenuId,
        _store: &mut GearConfigStore,
        _session: &mut dyn OlcSession,
        choice: &str,
    ) -> Choice<GearMenuId> {
        match id {
            GearMenuId::Root => match choice {
                "1" => Choice::Child(GearMenuId::Namespace(Namespace::Wielded)),
                "2" => Choice::Child(GearMenuId::Namespace(Namespace::Equipped)),
                _ => Choice::Invalid,
            },
            GearMenuId::Namespace(ns) => match choice.parse::<usize>() {
                Ok(n) if (1..=ns.categories().len()).contains(&n) => {
                    Choice::Child(GearMenuId::Category(ns, ns.categories()[n - 1]))
                }
                _ => Choice::Invalid,
            },
            GearMenuId::Category(_, category) => match choice {
                "1" => Choice::RequestLine {
                    prompt_id: PROMPT_ADD,
                    prompt: format!("Enter new {}: ", category.noun()),
                },
                "2" => Choice::RequestLine {
                    prompt_id: PROMPT_REMOVE,
                    prompt: format!("Enter {} to remove: ", category.noun()),
                },
                _ => Choice::Invalid,
            },
        }
    }

    fn parse_line(
        &self,
        id: GearMenuId,
        store: &mut GearConfigStore,
        session: &mut dyn OlcSession,
        prompt_id: u8,
        line: &str,
    ) -> bool {
        match id {
            GearMenuId::Category(ns, category) => {
                self.apply_line(store, session, ns, category, prompt_id, line)
            }
            _ => false,
        }
    }
}

fn lookup<'a>(
    store: &'a GearConfigStore,
    key: &str,
    ns: Namespace,
    category: Category,
) -> Option<&'a CategoryList> {
    store.get(key).and_then(|tree| tree.list(ns, category))
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn title_case(s: &str) -> String {
    s.split(' ').map(capitalize).collect::<Vec<_>>().join(" ")
}

/// Lay `items` out in as many fixed-width columns as fit in `line_width`.
///
/// Each cell is `"{marker} {item}"`; markers default to a space. An empty
/// list renders as `  (none)`. Every line ends with a newline and carries no
/// trailing whitespace.
pub fn format_tabular_list(
    items: &[String],
    markers: Option<&HashMap<String, char>>,
    line_width: usize,
) -> String {
    if items.is_empty() {
        return "  (none)\n".to_string();
    }

    let max_item_width = items
        .iter()
        .map(|item| item.chars().count())
        .max()
        .unwrap_or(0);
    let marker_width = if markers.is_some() { 2 } else { 0 };
    let column_width = max_item_width + marker_width + 2;
    let cols_per_line = (line_width.saturating_sub(2) / column_width).max(1);

    let mut out = String::new();
    for row in items.chunks(cols_per_line) {
        let mut line = String::from("  ");
        for item in row {
            let marker = markers
                .and_then(|m| m.get(item).copied())
                .unwrap_or(' ');
            let cell = format!("{} {}", marker, item);
            line.push_str(&format!("{:<width$}", cell, width = column_width));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gear::tree::ConfigTree;
    use crate::olc::engine::OlcState;
    use crate::olc::session::TranscriptSession;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn store_with_main() -> GearConfigStore {
        let mut store = GearConfigStore::new("unused.json");
        store.insert(DEFAULT_CONFIG_KEY, ConfigTree::with_defaults());
        store
    }

    #[test]
    fn tabular_list_wraps_columns() {
        let items = strings(&["a", "bb", "ccc"]);
        assert_eq!(format_tabular_list(&items, None, 20), "    a    bb   ccc\n");
        assert_eq!(format_tabular_list(&items, None, 12), "    a    bb\n    ccc\n");
        assert_eq!(format_tabular_list(&[], None, 78), "  (none)\n");
    }

    #[test]
    fn tabular_list_uses_markers() {
        let items = strings(&["fire", "ice"]);
        let mut markers = HashMap::new();
        markers.insert("fire".to_string(), '*');
        assert_eq!(
            format_tabular_list(&items, Some(&markers), 78),
            "  * fire    ice\n"
        );
    }

    #[test]
    fn tabular_list_never_drops_below_one_column() {
        let items = strings(&["adamantine", "crystal"]);
        assert_eq!(
            format_tabular_list(&items, None, 4),
            "    adamantine\n    crystal\n"
        );
    }

    #[test]
    fn namespace_menu_previews_categories() {
        let store = store_with_main();
        let mut session = TranscriptSession::new();
        GearMenus::default().render(
            GearMenuId::Namespace(Namespace::Wielded),
            &store,
            &mut session,
        );
        let text = session.take();
        assert!(text.contains(" 1) Damage types (7): slashing, bludgeoning, piercing, fire, cold..."));
        assert!(text.contains(" 3) Ranged types (5): bow, crossbow, sling, thrown, firearm\n"));
        assert!(text.contains(" 6) Special attacks (4): vorpal, sharpness, speed, accuracy"));
        assert!(text.contains(" Q) Return to main menu"));
    }

    #[test]
    fn category_menu_lists_current_entries() {
        let store = store_with_main();
        let mut session = TranscriptSession::new();
        GearMenus::default().render(
            GearMenuId::Category(Namespace::Equipped, Category::ArmorTypes),
            &store,
            &mut session,
        );
        let text = session.take();
        assert!(text.contains("Equipped Armor Types Configuration"));
        assert!(text.contains("Current armor types (4):"));
        assert!(text.contains("light"));
        assert!(text.contains(" 1) Add armor type"));
        assert!(text.contains(" Q) Return to equipped menu"));
    }

    #[test]
    fn shared_category_titles_name_their_namespace() {
        let store = store_with_main();
        let mut session = TranscriptSession::new();
        let menus = GearMenus::default();
        menus.render(
            GearMenuId::Category(Namespace::Wielded, Category::Materials),
            &store,
            &mut session,
        );
        assert!(session.take().contains("\nWielded Materials Configuration\n"));
        menus.render(
            GearMenuId::Category(Namespace::Equipped, Category::Materials),
            &store,
            &mut session,
        );
        assert!(session.take().contains("\nEquipped Materials Configuration\n"));
    }

    #[test]
    fn add_reports_duplicates_and_rejects_blank_lines() {
        let mut store = store_with_main();
        let mut session = TranscriptSession::new();
        let menus = GearMenus::default();
        let id = GearMenuId::Category(Namespace::Wielded, Category::Materials);

        assert!(menus.parse_line(id, &mut store, &mut session, PROMPT_ADD, "  obsidian "));
        assert_eq!(session.take(), "Added material: obsidian\n");
        assert!(!menus.parse_line(id, &mut store, &mut session, PROMPT_ADD, "obsidian"));
        assert_eq!(session.take(), "Material 'obsidian' already exists.\n");
        assert!(!menus.parse_line(id, &mut store, &mut session, PROMPT_ADD, "   "));
        assert!(!menus.parse_line(id, &mut store, &mut session, PROMPT_ADD, &"z".repeat(41)));
        assert!(session.take().starts_with("Invalid material"));

        let materials = store.items(Namespace::Wielded, Category::Materials);
        assert_eq!(materials.last().map(String::as_str), Some("obsidian"));
        assert_eq!(materials.len(), 11);
    }

    #[test]
    fn remove_missing_entry_reports_not_found() {
        let mut store = store_with_main();
        let before = store.items(Namespace::Wielded, Category::Materials);
        let mut session = TranscriptSession::new();
        let menus = GearMenus::default();
        let id = GearMenuId::Category(Namespace::Wielded, Category::Materials);
        assert!(!menus.parse_line(id, &mut store, &mut session, PROMPT_REMOVE, "unobtainium"));
        assert_eq!(session.take(), "Material 'unobtainium' not found.\n");
        assert_eq!(store.items(Namespace::Wielded, Category::Materials), before);
    }

    #[test]
    fn missing_configuration_key_is_reported() {
        let mut store = store_with_main();
        let mut session = TranscriptSession::new();
        let menus = GearMenus::new("arena");
        let id = GearMenuId::Category(Namespace::Equipped, Category::Materials);
        assert!(!menus.parse_line(id, &mut store, &mut session, PROMPT_ADD, "bone"));
        assert_eq!(session.take(), "Configuration 'arena' not found.\n");
    }

    #[test]
    fn root_and_namespace_dispatch() {
        let mut store = store_with_main();
        let mut session = TranscriptSession::new();
        let menus = GearMenus::default();
        assert_eq!(
            menus.dispatch(GearMenuId::Root, &mut store, &mut session, "2"),
            Choice::Child(GearMenuId::Namespace(Namespace::Equipped))
        );
        assert_eq!(
            menus.dispatch(GearMenuId::Root, &mut store, &mut session, "3"),
            Choice::Invalid
        );
        assert_eq!(
            menus.dispatch(
                GearMenuId::Namespace(Namespace::Equipped),
                &mut store,
                &mut session,
                "3"
            ),
            Choice::Child(GearMenuId::Category(
                Namespace::Equipped,
                Category::SpecialProperties
            ))
        );
        assert_eq!(
            menus.dispatch(
                GearMenuId::Namespace(Namespace::Equipped),
                &mut store,
                &mut session,
                "4"
            ),
            Choice::Invalid
        );
    }

    #[test]
    fn editing_session_removes_entry_and_exits_once() {
        let mut store = store_with_main();
        let mut session = TranscriptSession::new();
        let mut olc = GearMenus::default()
            .into_engine()
            .on_exit(|store: &mut GearConfigStore| {
                store.add_entry(Namespace::Equipped, Category::ArmorTypes, "exit-marker");
            });
        olc.start(&store, &mut session);
        for input in ["1", "1", "2"] {
            olc.handle_input(&mut store, &mut session, input);
        }
        assert!(session.contents().ends_with("Enter damage type to remove: "));
        olc.handle_input(&mut store, &mut session, "slashing");
        assert!(session.contains("Removed damage type: slashing\n"));
        assert!(!store.is_valid(Namespace::Wielded, Category::DamageTypes, "slashing"));

        assert_eq!(olc.handle_input(&mut store, &mut session, "Q"), OlcState::ShowingMenu);
        assert_eq!(olc.handle_input(&mut store, &mut session, "Q"), OlcState::ShowingMenu);
        assert_eq!(olc.handle_input(&mut store, &mut session, "Q"), OlcState::Terminated);
        let armor = store.items(Namespace::Equipped, Category::ArmorTypes);
        assert_eq!(armor.iter().filter(|a| a.as_str() == "exit-marker").count(), 1);
    }
}
