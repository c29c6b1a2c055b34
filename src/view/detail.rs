//! The generic detail view.
//!
//! One dismissible surface per open entity, keyed by an [`EntityRef`] and
//! switching on its kind — the single-renderer shape that replaces four
//! mutually-importing per-entity components and with them the module
//! cycle.
//!
//! ## State machine
//!
//! `Closed → Loading` on open, `Loading → Loaded` on fetch success (an
//! empty list is a valid loaded state), `Loading → Error` on fetch
//! failure, `Loaded | Error → Closed` on dismiss. Dismissal discards all
//! instance state; reopening always refetches.
//!
//! ## Cancellation
//!
//! Every open bumps a fetch epoch and hands out a ticket. A result is
//! applied only when its ticket matches the current epoch and the view is
//! still loading, so a view dismissed mid-fetch never flashes the stale
//! result back open, and a dismiss-then-reopen applies exactly the second
//! fetch's result.

use crate::db::repository::{DirectoryError, DirectoryResult};
use crate::models::entities::{CoachReview, EntityKind, EntityRef, Program};
use crate::models::view_rows::SessionViewRow;
use crate::services::fetcher::EntityFetcher;

/// Data held by a loaded detail view.
#[derive(Debug, Clone, Default)]
pub struct ViewData {
    /// Related sessions for this entity.
    pub sessions: Vec<SessionViewRow>,
    /// Reviews; populated only for coach views.
    pub reviews: Vec<CoachReview>,
    /// Program rows matching the name; populated only for program views.
    pub programs: Vec<Program>,
}

/// Lifecycle state of one detail-view instance.
#[derive(Debug, Clone, Default)]
pub enum ViewState {
    #[default]
    Closed,
    Loading,
    Loaded(ViewData),
    /// Fetch failed; the surface renders a legible error state, never an
    /// indefinite spinner.
    Error(String),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, ViewState::Loaded(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ViewState::Error(_))
    }
}

/// Ticket returned by [`DetailView::begin_open`]; pairs a pending fetch
/// with the epoch it was issued in.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    epoch: u64,
}

/// A scoped, dismissible detail surface for one entity.
///
/// Each instance owns its own fetched data and four independently nullable
/// nested-selection slots (arena-of-one): opening a related entity creates
/// a fresh nested instance, closing one resets only that slot. Instances
/// never share caches; two views over the same entity in different
/// branches of the navigation graph fetch independently.
#[derive(Debug)]
pub struct DetailView {
    entity: EntityRef,
    state: ViewState,
    epoch: u64,
    nested_session: Option<Box<DetailView>>,
    nested_location: Option<Box<DetailView>>,
    nested_coach: Option<Box<DetailView>>,
    nested_program: Option<Box<DetailView>>,
}

impl DetailView {
    pub fn new(entity: EntityRef) -> Self {
        Self {
            entity,
            state: ViewState::Closed,
            epoch: 0,
            nested_session: None,
            nested_location: None,
            nested_coach: None,
            nested_program: None,
        }
    }

    pub fn entity(&self) -> &EntityRef {
        &self.entity
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Header title: the fallback display name until data arrives, then
    /// still the fallback (the header never flickers), the raw id when no
    /// fallback was provided, or the kind label as a last resort.
    pub fn header_title(&self) -> &str {
        self.entity
            .fallback_name
            .as_deref()
            .or(self.entity.id.as_deref())
            .unwrap_or_else(|| self.entity.kind.label())
    }

    /// Start an open: transition to `Loading` and invalidate any earlier
    /// in-flight fetch.
    pub fn begin_open(&mut self) -> FetchTicket {
        self.epoch += 1;
        self.state = ViewState::Loading;
        FetchTicket { epoch: self.epoch }
    }

    /// Apply a fetch result. Returns whether it was applied; a result from
    /// a superseded epoch, or arriving when the view is no longer loading,
    /// is discarded.
    pub fn resolve(&mut self, ticket: FetchTicket, result: DirectoryResult<ViewData>) -> bool {
        if ticket.epoch != self.epoch || !self.state.is_loading() {
            log::debug!(
                "discarding stale fetch result for {} view (epoch {} != {})",
                self.entity.kind.label(),
                ticket.epoch,
                self.epoch
            );
            return false;
        }
        self.state = match result {
            Ok(data) => ViewState::Loaded(data),
            Err(e) => ViewState::Error(e.to_string()),
        };
        true
    }

    /// Dismiss this view: discard fetched data and all nested views, and
    /// invalidate any in-flight fetch so its result is dropped on arrival.
    pub fn dismiss(&mut self) {
        self.epoch += 1;
        self.state = ViewState::Closed;
        self.nested_session = None;
        self.nested_location = None;
        self.nested_coach = None;
        self.nested_program = None;
    }

    /// Open this view against a fetcher: begin, fetch the kind-appropriate
    /// related data, resolve. Returns whether the result was applied (a
    /// concurrent dismiss discards it).
    ///
    /// A non-navigable reference (no id) is a no-op: it renders as plain
    /// text upstream, never as an id-less modal.
    pub async fn open(&mut self, fetcher: &EntityFetcher) -> bool {
        if !self.entity.is_navigable() {
            return false;
        }
        let ticket = self.begin_open();
        let result = fetch_view_data(fetcher, &self.entity).await;
        self.resolve(ticket, result)
    }

    /// Push a nested detail view for a related entity. The nested instance
    /// starts closed; driving its fetch is the caller's next step. The
    /// parent's own state is untouched.
    ///
    /// Returns `false` (and opens nothing) for a non-navigable reference.
    pub fn open_related(&mut self, entity: EntityRef) -> bool {
        if !entity.is_navigable() {
            return false;
        }
        let kind = entity.kind;
        *self.slot_mut(kind) = Some(Box::new(DetailView::new(entity)));
        true
    }

    /// Push a nested view and drive its fetch in one step.
    pub async fn open_related_with(&mut self, entity: EntityRef, fetcher: &EntityFetcher) -> bool {
        if !self.open_related(entity.clone()) {
            return false;
        }
        match self.related_mut(entity.kind) {
            Some(nested) => nested.open(fetcher).await,
            None => false,
        }
    }

    /// Close the nested view of one kind. The parent's own fetched list is
    /// preserved; only that slot resets.
    pub fn close_related(&mut self, kind: EntityKind) {
        if let Some(nested) = self.slot_mut(kind).as_deref_mut() {
            nested.dismiss();
        }
        *self.slot_mut(kind) = None;
    }

    pub fn related(&self, kind: EntityKind) -> Option<&DetailView> {
        match kind {
            EntityKind::Session => self.nested_session.as_deref(),
            EntityKind::Location => self.nested_location.as_deref(),
            EntityKind::Coach => self.nested_coach.as_deref(),
            EntityKind::Program => self.nested_program.as_deref(),
        }
    }

    pub fn related_mut(&mut self, kind: EntityKind) -> Option<&mut DetailView> {
        match kind {
            EntityKind::Session => self.nested_session.as_deref_mut(),
            EntityKind::Location => self.nested_location.as_deref_mut(),
            EntityKind::Coach => self.nested_coach.as_deref_mut(),
            EntityKind::Program => self.nested_program.as_deref_mut(),
        }
    }

    /// Longest open nesting chain, this view included. There is no
    /// enforced maximum depth; hosts that want a cap apply their own
    /// policy on top of this.
    pub fn depth(&self) -> usize {
        1 + [
            &self.nested_session,
            &self.nested_location,
            &self.nested_coach,
            &self.nested_program,
        ]
        .into_iter()
        .filter_map(|slot| slot.as_deref())
        .map(DetailView::depth)
        .max()
        .unwrap_or(0)
    }

    fn slot_mut(&mut self, kind: EntityKind) -> &mut Option<Box<DetailView>> {
        match kind {
            EntityKind::Session => &mut self.nested_session,
            EntityKind::Location => &mut self.nested_location,
            EntityKind::Coach => &mut self.nested_coach,
            EntityKind::Program => &mut self.nested_program,
        }
    }
}

/// Fetch the related data for an entity reference.
///
/// Coach views also carry reviews; a review fetch failure degrades to an
/// empty review list rather than failing the whole view, since reviews are
/// a static side list in the current instantiation.
async fn fetch_view_data(
    fetcher: &EntityFetcher,
    entity: &EntityRef,
) -> DirectoryResult<ViewData> {
    let id = entity
        .id
        .as_deref()
        .ok_or_else(|| DirectoryError::validation("entity reference has no id"))?;

    match entity.kind {
        EntityKind::Session => {
            let sessions = fetcher.sessions_related_to(&id.into()).await?;
            Ok(ViewData {
                sessions,
                ..ViewData::default()
            })
        }
        EntityKind::Location => {
            let sessions = fetcher.sessions_by_location(&id.into()).await?;
            Ok(ViewData {
                sessions,
                ..ViewData::default()
            })
        }
        EntityKind::Coach => {
            let coach_id = id.into();
            let (sessions, reviews) = futures::join!(
                fetcher.sessions_by_coach(&coach_id),
                fetcher.reviews_by_coach(&coach_id),
            );
            let sessions = sessions?;
            let reviews = match reviews {
                Ok(reviews) => reviews,
                Err(e) => {
                    log::warn!("review fetch degraded to empty list: {e}");
                    Vec::new()
                }
            };
            Ok(ViewData {
                sessions,
                reviews,
                ..ViewData::default()
            })
        }
        // Program drill-down is by name; the ref's id carries the name.
        EntityKind::Program => {
            let sessions = fetcher.sessions_by_program(id).await?;
            let programs = fetcher.programs_by_name(id).await?;
            Ok(ViewData {
                sessions,
                programs,
                ..ViewData::default()
            })
        }
    }
}
