use std::time::Duration;

use pretty_assertions::assert_eq;
use vk_core::{
    Filter, InventoryStore, Item, ItemForm, ItemType, Location, StoreError, TypeFilter,
};

use super::test_support::MemoryStore;
use super::{ControllerError, ControllerState, InventoryController, NoticeLevel, Operation, Outcome};
use crate::controller::Dialogs;

fn form(name: &str, item_type: ItemType, power: &str, location: Location) -> ItemForm {
    ItemForm {
        name: name.into(),
        item_type,
        power: power.into(),
        location,
        notes: String::new(),
    }
}

fn fatebringer() -> ItemForm {
    form("Fatebringer", ItemType::Weapon, "1600", Location::Character1)
}

fn lion_rampant() -> ItemForm {
    form("Lion Rampant", ItemType::Armor, "1590", Location::Character2)
}

/// Scripted dialog answers; records what was shown.
#[derive(Default)]
struct ScriptedDialogs {
    edit: Option<ItemForm>,
    confirm: bool,
    shown: Vec<String>,
}

impl Dialogs for ScriptedDialogs {
    fn edit_item(&mut self, current: &Item) -> Option<ItemForm> {
        self.shown.push(format!("edit:{}", current.name));
        self.edit.clone()
    }

    fn confirm_delete(&mut self, item: &Item) -> bool {
        self.shown.push(format!("delete:{}", item.name));
        self.confirm
    }
}

async fn controller_with(forms: &[ItemForm]) -> InventoryController<MemoryStore> {
    let store = MemoryStore::new();
    for form in forms {
        store.seed(form);
    }
    let mut controller = InventoryController::new(store);
    controller.refresh().await.expect("initial refresh");
    controller
}

fn names(items: &[&Item]) -> Vec<String> {
    items.iter().map(|item| item.name.clone()).collect()
}

// ---------------------------------------------------------------------------
// refresh / visible
// ---------------------------------------------------------------------------

#[tokio::test]
async fn refresh_lists_rows_sorted_by_name() {
    let controller = controller_with(&[lion_rampant(), fatebringer()]).await;
    let rows: Vec<&str> = controller.rows().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(rows, ["Fatebringer", "Lion Rampant"]);
    assert_eq!(controller.state(), ControllerState::Idle);
}

#[tokio::test]
async fn refresh_twice_is_idempotent() {
    let mut controller = controller_with(&[fatebringer(), lion_rampant()]).await;
    let first = controller.rows().to_vec();
    controller.refresh().await.unwrap();
    assert_eq!(controller.rows(), first.as_slice());
}

#[tokio::test]
async fn failed_refresh_leaves_rows_empty_and_idle() {
    let mut controller = controller_with(&[fatebringer()]).await;
    controller
        .store()
        .fail_next(|| StoreError::Auth("token rejected".into()));

    let err = controller.refresh().await.unwrap_err();
    assert!(matches!(err, ControllerError::Store(StoreError::Auth(_))));
    assert!(controller.rows().is_empty());
    assert_eq!(controller.state(), ControllerState::Idle);
}

#[tokio::test]
async fn search_filter_matches_case_insensitively() {
    let controller = controller_with(&[fatebringer(), lion_rampant()]).await;
    let visible = controller.visible(&Filter::new("fate", TypeFilter::All));
    assert_eq!(names(&visible), ["Fatebringer"]);
    assert_eq!(controller.rows().len(), 2);
}

#[tokio::test]
async fn type_filter_hides_other_types() {
    let controller = controller_with(&[fatebringer(), lion_rampant()]).await;
    let visible = controller.visible(&Filter::new("", TypeFilter::Only(ItemType::Armor)));
    assert_eq!(names(&visible), ["Lion Rampant"]);
    let visible = controller.visible(&Filter::new("fate", TypeFilter::Only(ItemType::Armor)));
    assert!(visible.is_empty());
}

#[tokio::test]
async fn filtering_never_calls_the_store() {
    let controller = controller_with(&[fatebringer()]).await;
    let before = controller.store().calls().len();
    let _ = controller.visible(&Filter::new("x", TypeFilter::All));
    assert_eq!(controller.store().calls().len(), before);
}

// ---------------------------------------------------------------------------
// select
// ---------------------------------------------------------------------------

#[tokio::test]
async fn select_by_id_or_unique_name() {
    let controller = controller_with(&[fatebringer(), lion_rampant()]).await;
    let id = controller.rows()[1].id.clone();
    assert_eq!(controller.select(&id).unwrap().name, "Lion Rampant");
    assert_eq!(controller.select("FATEBRINGER").unwrap().name, "Fatebringer");
    assert!(controller.select("Gjallarhorn").is_none());
}

#[tokio::test]
async fn select_rejects_ambiguous_name() {
    let controller = controller_with(&[fatebringer(), fatebringer()]).await;
    assert!(controller.select("Fatebringer").is_none());
}

// ---------------------------------------------------------------------------
// add
// ---------------------------------------------------------------------------

#[tokio::test]
async fn add_then_list_round_trips_fields() {
    let mut controller = controller_with(&[]).await;
    let id = controller.add_item(&fatebringer()).await.unwrap();

    assert!(!id.is_empty());
    assert_eq!(controller.rows().len(), 1);
    let row = &controller.rows()[0];
    assert_eq!(row.id, id);
    assert_eq!(row.to_form(), fatebringer());
}

#[tokio::test]
async fn add_with_bad_power_is_coercion_error() {
    let mut controller = controller_with(&[]).await;
    let bad = form("Ace of Spades", ItemType::Weapon, "lots", Location::Vault);
    let err = controller.add_item(&bad).await.unwrap_err();
    assert!(matches!(err, ControllerError::Store(StoreError::Coercion(_))));
    assert_eq!(controller.state(), ControllerState::Idle);
    assert!(controller.rows().is_empty());
}

// ---------------------------------------------------------------------------
// edit
// ---------------------------------------------------------------------------

#[tokio::test]
async fn edit_updates_power_only() {
    let mut notes_form = fatebringer();
    notes_form.notes = "VoG drop".into();
    let mut controller = controller_with(&[notes_form, lion_rampant()]).await;
    let id = controller.select("Fatebringer").unwrap().id.clone();

    let mut edited = controller.select(&id).unwrap().to_form();
    edited.power = "1610".into();
    edited.notes = "overwritten?".into();
    let mut dialogs = ScriptedDialogs {
        edit: Some(edited),
        ..Default::default()
    };

    let outcome = controller.edit(Some(&id), &mut dialogs).await.unwrap();
    assert_eq!(outcome, Outcome::Done);

    let row = controller.select(&id).unwrap();
    assert_eq!(row.power, 1610);
    assert_eq!(row.name, "Fatebringer");
    assert_eq!(row.item_type, ItemType::Weapon);
    assert_eq!(row.location, Location::Character1);
    assert_eq!(row.notes, "VoG drop");
    assert_eq!(controller.select("Lion Rampant").unwrap().power, 1590);
}

#[tokio::test]
async fn edit_without_selection_is_noop() {
    let mut controller = controller_with(&[fatebringer()]).await;
    let before = controller.store().calls();
    let mut dialogs = ScriptedDialogs::default();

    let outcome = controller.edit(None, &mut dialogs).await.unwrap();
    assert_eq!(outcome, Outcome::NoSelection);
    let outcome = controller.edit(Some("missing"), &mut dialogs).await.unwrap();
    assert_eq!(outcome, Outcome::NoSelection);

    assert!(dialogs.shown.is_empty());
    assert_eq!(controller.store().calls(), before);
}

#[tokio::test]
async fn cancelled_edit_makes_no_call() {
    let mut controller = controller_with(&[fatebringer()]).await;
    let id = controller.rows()[0].id.clone();
    let before = controller.store().calls();
    let mut dialogs = ScriptedDialogs::default();

    let outcome = controller.edit(Some(&id), &mut dialogs).await.unwrap();
    assert_eq!(outcome, Outcome::Cancelled);
    assert_eq!(dialogs.shown, ["edit:Fatebringer"]);
    assert_eq!(controller.store().calls(), before);
}

#[tokio::test]
async fn failed_update_is_surfaced_and_skips_reload() {
    let mut controller = controller_with(&[fatebringer()]).await;
    let id = controller.rows()[0].id.clone();
    controller
        .store()
        .fail_next(|| StoreError::NotFound("page archived elsewhere".into()));
    let mut dialogs = ScriptedDialogs {
        edit: Some(fatebringer()),
        ..Default::default()
    };

    let err = controller.edit(Some(&id), &mut dialogs).await.unwrap_err();
    assert!(matches!(err, ControllerError::Store(StoreError::NotFound(_))));
    assert_eq!(controller.state(), ControllerState::Idle);
    assert_eq!(controller.store().calls().last(), Some(&"update_item"));
}

// ---------------------------------------------------------------------------
// delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn confirmed_delete_archives_and_hides() {
    let mut controller = controller_with(&[fatebringer(), lion_rampant()]).await;
    let id = controller.select("Fatebringer").unwrap().id.clone();
    let mut dialogs = ScriptedDialogs {
        confirm: true,
        ..Default::default()
    };

    let outcome = controller.delete(Some(&id), &mut dialogs).await.unwrap();
    assert_eq!(outcome, Outcome::Done);
    assert!(controller.rows().iter().all(|row| row.id != id));
    assert_eq!(controller.rows().len(), 1);
    assert_eq!(controller.store().is_archived(&id), Some(true));
}

#[tokio::test]
async fn declined_delete_makes_no_call() {
    let mut controller = controller_with(&[fatebringer()]).await;
    let id = controller.rows()[0].id.clone();
    let before = controller.store().calls();
    let mut dialogs = ScriptedDialogs::default();

    let outcome = controller.delete(Some(&id), &mut dialogs).await.unwrap();
    assert_eq!(outcome, Outcome::Declined);
    assert_eq!(dialogs.shown, ["delete:Fatebringer"]);
    assert_eq!(controller.store().calls(), before);
    assert_eq!(controller.rows().len(), 1);
}

#[tokio::test]
async fn delete_without_selection_is_noop() {
    let mut controller = controller_with(&[fatebringer()]).await;
    let mut dialogs = ScriptedDialogs {
        confirm: true,
        ..Default::default()
    };
    let outcome = controller.delete(None, &mut dialogs).await.unwrap();
    assert_eq!(outcome, Outcome::NoSelection);
    assert!(dialogs.shown.is_empty());
}

// ---------------------------------------------------------------------------
// busy guard
// ---------------------------------------------------------------------------

#[tokio::test]
async fn busy_controller_rejects_dispatch_without_calling_store() {
    let mut controller = controller_with(&[fatebringer()]).await;
    let id = controller.rows()[0].id.clone();
    let before = controller.store().calls();
    controller.state = ControllerState::Busy(Operation::Update);

    let mut dialogs = ScriptedDialogs {
        confirm: true,
        ..Default::default()
    };
    let err = controller.delete(Some(&id), &mut dialogs).await.unwrap_err();
    assert!(matches!(err, ControllerError::Busy(Operation::Update)));

    let err = controller.add_item(&lion_rampant()).await.unwrap_err();
    assert!(matches!(err, ControllerError::Busy(Operation::Update)));

    let (notice, id) = controller.provision_database().await;
    assert_eq!(notice.level, NoticeLevel::Failure);
    assert!(id.is_none());

    assert_eq!(controller.store().calls(), before);
    assert_eq!(controller.rows().len(), 1);
}

#[tokio::test]
async fn cancelled_refresh_does_not_leave_controller_busy() {
    let mut controller = controller_with(&[fatebringer()]).await;
    controller.store().stall_next();

    let timed_out = tokio::time::timeout(Duration::from_millis(20), controller.refresh()).await;
    assert!(timed_out.is_err());
    assert_eq!(controller.state(), ControllerState::Idle);

    assert_eq!(controller.refresh().await.expect("refresh after cancel"), 1);
    let id = controller.rows()[0].id.clone();
    let mut dialogs = ScriptedDialogs {
        confirm: true,
        ..Default::default()
    };
    let outcome = controller.delete(Some(&id), &mut dialogs).await.expect("delete");
    assert_eq!(outcome, Outcome::Done);
    assert_eq!(controller.state(), ControllerState::Idle);
}

// ---------------------------------------------------------------------------
// sync / provision / repoint
// ---------------------------------------------------------------------------

#[tokio::test]
async fn sync_now_reports_success_and_failure() {
    let mut controller = controller_with(&[fatebringer(), lion_rampant()]).await;
    let notice = controller.sync_now().await;
    assert_eq!(notice.level, NoticeLevel::Success);
    assert!(notice.message.contains("synced 2 items"));

    controller
        .store()
        .fail_next(|| StoreError::network(std::io::Error::other("connection reset")));
    let notice = controller.sync_now().await;
    assert!(notice.is_failure());
    assert!(notice.message.contains("connection reset"));
}

#[tokio::test]
async fn provision_does_not_repoint_until_activated() {
    let mut controller = controller_with(&[fatebringer()]).await;
    let (notice, new_id) = controller.provision_database().await;
    assert_eq!(notice.level, NoticeLevel::Success);
    let new_id = new_id.expect("database id");
    assert_eq!(controller.store().database_id(), Some("db-0"));

    controller.set_active_database(new_id.clone());
    assert_eq!(controller.store().database_id(), Some(new_id.as_str()));
    assert!(controller.rows().is_empty());

    controller.refresh().await.unwrap();
    assert!(controller.rows().is_empty());
}

#[tokio::test]
async fn provisioning_twice_creates_two_databases() {
    let mut controller = controller_with(&[]).await;
    let (_, first) = controller.provision_database().await;
    let (_, second) = controller.provision_database().await;
    assert_ne!(first.unwrap(), second.unwrap());
}

#[tokio::test]
async fn failed_provision_is_failure_notice() {
    let mut controller = controller_with(&[]).await;
    controller
        .store()
        .fail_next(|| StoreError::NotConfigured("notion.page_id"));
    let (notice, id) = controller.provision_database().await;
    assert!(notice.is_failure());
    assert!(notice.message.contains("notion.page_id"));
    assert!(id.is_none());
    assert_eq!(controller.state(), ControllerState::Idle);
}

#[tokio::test]
async fn unconfigured_store_fails_refresh() {
    let mut controller = InventoryController::new(MemoryStore::unconfigured());
    let err = controller.refresh().await.unwrap_err();
    assert!(matches!(
        err,
        ControllerError::Store(StoreError::NotConfigured("notion.database_id"))
    ));
}

// ---------------------------------------------------------------------------
// end-to-end scenario
// ---------------------------------------------------------------------------

#[tokio::test]
async fn provision_add_update_delete_scenario() {
    let mut controller = InventoryController::new(MemoryStore::unconfigured());

    let (_, database) = controller.provision_database().await;
    controller.set_active_database(database.expect("database created"));

    let id = controller.add_item(&fatebringer()).await.unwrap();
    assert_eq!(controller.rows().len(), 1);
    assert_eq!(controller.rows()[0].id, id);
    assert_eq!(controller.rows()[0].power, 1600);

    let mut edited = controller.rows()[0].to_form();
    edited.power = "1610".into();
    let mut dialogs = ScriptedDialogs {
        edit: Some(edited),
        confirm: true,
        ..Default::default()
    };
    controller.edit(Some(&id), &mut dialogs).await.unwrap();
    assert_eq!(controller.rows()[0].power, 1610);

    controller.delete(Some(&id), &mut dialogs).await.unwrap();
    assert!(controller.rows().is_empty());
}
