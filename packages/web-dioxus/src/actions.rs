//! Row actions: caller-controlled callbacks or self-navigating links

use dioxus::prelude::*;

use crate::types::ListingId;

pub const DETAIL_PATH: &str = "/upload-lowongan/detail";
pub const EDIT_DRAFT_PATH: &str = "/upload-lowongan/edit/draft";

/// Where an action navigates when no callback handles it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTemplate {
    Detail,
    EditDraft,
}

impl LinkTemplate {
    pub fn href(&self, id: ListingId) -> String {
        match self {
            LinkTemplate::Detail => format!("{DETAIL_PATH}/{id}"),
            LinkTemplate::EditDraft => format!("{EDIT_DRAFT_PATH}/{id}"),
        }
    }
}

/// How a single row action is carried out.
#[derive(Clone, PartialEq)]
pub enum ActionProvider {
    /// The embedding parent handles the listing id.
    Controlled(EventHandler<ListingId>),
    /// The table links to a page of its own.
    Navigate(LinkTemplate),
}

impl ActionProvider {
    pub fn new(callback: Option<EventHandler<ListingId>>, fallback: LinkTemplate) -> Self {
        match callback {
            Some(handler) => ActionProvider::Controlled(handler),
            None => ActionProvider::Navigate(fallback),
        }
    }

    pub fn is_controlled(&self) -> bool {
        matches!(self, ActionProvider::Controlled(_))
    }

    /// Link target for `id`, or `None` when a callback handles the action.
    pub fn href(&self, id: ListingId) -> Option<String> {
        match self {
            ActionProvider::Controlled(_) => None,
            ActionProvider::Navigate(template) => Some(template.href(id)),
        }
    }
}

/// The detail and edit actions offered on every row.
#[derive(Clone, PartialEq)]
pub struct RowActions {
    pub detail: ActionProvider,
    pub edit: ActionProvider,
}

impl RowActions {
    pub fn new(
        on_detail: Option<EventHandler<ListingId>>,
        on_edit: Option<EventHandler<ListingId>>,
    ) -> Self {
        Self {
            detail: ActionProvider::new(on_detail, LinkTemplate::Detail),
            edit: ActionProvider::new(on_edit, LinkTemplate::EditDraft),
        }
    }
}
