//! Draft table state from first render to paging through results

use lowongan_web::state::{DraftTableState, TableView};
use lowongan_web::summary::summarize;
use lowongan_web::types::Lowongan;
use serde_json::json;

fn listings(count: i64) -> Vec<Lowongan> {
    (1..=count)
        .map(|id| {
            serde_json::from_value(json!({
                "id": id,
                "posisi": format!("Posisi {id}"),
                "tugas": ["A", "B", "C"],
            }))
            .unwrap()
        })
        .collect()
}

fn shown(state: &DraftTableState) -> (usize, Vec<i64>) {
    match state.view() {
        TableView::Rows { offset, rows } => (offset, rows.iter().map(|l| l.id).collect()),
        other => panic!("expected rows, got {other:?}"),
    }
}

#[test]
fn test_seven_records_five_per_page() {
    let mut state = DraftTableState::new();
    state.resolve(Ok(listings(7)));
    state.set_per_page(5);

    assert_eq!(state.total_pages(), 2);
    assert_eq!(shown(&state), (0, vec![1, 2, 3, 4, 5]));

    state.set_page(2);
    assert_eq!(shown(&state), (5, vec![6, 7]));
}

#[test]
fn test_page_size_change_returns_to_first_page() {
    let mut state = DraftTableState::new();
    state.resolve(Ok(listings(25)));
    state.set_page(3);
    assert_eq!(shown(&state).0, 20);

    state.set_per_page(5);
    assert_eq!(state.paginator().page(), 1);
    assert_eq!(shown(&state), (0, vec![1, 2, 3, 4, 5]));
}

#[test]
fn test_rejection_then_no_further_transitions() {
    let mut state = DraftTableState::new();
    assert_eq!(state.view(), TableView::Loading);

    state.resolve(Err("Gagal memuat data X".to_string()));
    assert_eq!(state.view(), TableView::Error("Gagal memuat data X"));

    state.resolve(Ok(listings(3)));
    assert_eq!(state.view(), TableView::Error("Gagal memuat data X"));
    assert_eq!(state.total_pages(), 1);
}

#[test]
fn test_empty_fetch_shows_empty_state() {
    let mut state = DraftTableState::new();
    state.resolve(Ok(Vec::new()));
    assert_eq!(state.view(), TableView::Empty);
    assert_eq!(state.total_pages(), 1);
}

#[test]
fn test_rows_summarize_list_fields() {
    let mut state = DraftTableState::new();
    state.resolve(Ok(listings(1)));

    let row = &state.visible_rows()[0];
    assert_eq!(summarize(&row.duties), "A, B +1 lainnya");
    assert_eq!(summarize(&row.benefits), "");
}
