//! Snack CRUD controller.
//!
//! # Responsibility
//! - Translate user actions into store calls.
//! - Maintain the read-your-writes mirror, selection pointer and form buffer.
//!
//! # Invariants
//! - Every successful mutation triggers a full reload, then clears form and
//!   selection.
//! - A failed command leaves mirror, selection and form at their last
//!   known-good values; no reload happens on failure.
//! - Update and delete never reach the store without a current selection.

use crate::model::snack::{SnackFields, SnackId, SnackRecord};
use crate::repo::snack_store::{SnackStore, StoreError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CommandResult<T> = Result<T, CommandError>;

/// Error surfaced by controller commands.
///
/// Nothing here is fatal: presentations report the message and keep running.
#[derive(Debug)]
pub enum CommandError {
    /// Update/delete was invoked with no row selected; no store call was made.
    NoSelection,
    /// The store rejected or failed the operation.
    Store(StoreError),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoSelection => write!(f, "no record selected"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CommandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NoSelection => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for CommandError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Result of a successful update or confirmed delete.
///
/// `MissingRow` means the store affected zero rows (the record vanished
/// between selection and commit). Whether that is worth telling the user is
/// the presentation's call; the mirror was reloaded and is accurate either
/// way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    Applied,
    MissingRow,
}

/// User answer to the delete confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteDecision {
    Confirmed,
    Declined,
}

/// Result of a delete command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    MissingRow,
    /// The user declined the confirmation; nothing changed.
    Declined,
}

/// Mediates between a presentation layer and a [`SnackStore`].
///
/// Holds a disposable snapshot of the store's listing (the mirror), the id
/// of the row currently chosen for editing, and the form buffer the
/// presentation edits in place.
pub struct SnackController<S: SnackStore> {
    store: S,
    mirror: Vec<SnackRecord>,
    selection: Option<SnackId>,
    form: SnackFields,
}

impl<S: SnackStore> SnackController<S> {
    /// Creates a controller with an empty mirror.
    ///
    /// Callers run [`refresh`](Self::refresh) once at startup; a failure
    /// there is the one case worth treating as fatal.
    pub fn new(store: S) -> Self {
        Self {
            store,
            mirror: Vec::new(),
            selection: None,
            form: SnackFields::default(),
        }
    }

    /// The current listing snapshot, sorted ascending by id.
    pub fn mirror(&self) -> &[SnackRecord] {
        &self.mirror
    }

    /// Id of the currently selected record, if any.
    pub fn selection(&self) -> Option<SnackId> {
        self.selection
    }

    /// Read access to the form buffer.
    pub fn form(&self) -> &SnackFields {
        &self.form
    }

    /// Write access to the form buffer for the presentation's field entry.
    pub fn form_mut(&mut self) -> &mut SnackFields {
        &mut self.form
    }

    /// Replaces the mirror with a fresh listing.
    ///
    /// On failure the previous mirror stays in place.
    pub fn refresh(&mut self) -> CommandResult<()> {
        let records = self.store.list().inspect_err(|err| {
            warn!("event=snack_refresh module=controller status=error error={err}");
        })?;
        info!(
            "event=snack_refresh module=controller status=ok rows={}",
            records.len()
        );
        self.mirror = records;
        Ok(())
    }

    /// Selects the mirror row at `index`, copying its fields verbatim into
    /// the form buffer.
    ///
    /// Returns the selected id, or `None` (state untouched) when `index` is
    /// out of range.
    pub fn select_row(&mut self, index: usize) -> Option<SnackId> {
        let record = self.mirror.get(index)?;
        self.selection = Some(record.id);
        self.form = record.fields.clone();
        self.selection
    }

    /// Drops the selection and empties the form buffer.
    pub fn clear_selection(&mut self) {
        self.selection = None;
        self.form = SnackFields::default();
    }

    /// Inserts the form buffer as a new record.
    ///
    /// On success the mirror is reloaded, the form cleared, and the fresh id
    /// returned.
    pub fn add(&mut self) -> CommandResult<SnackId> {
        let id = self.store.insert(&self.form).inspect_err(|err| {
            warn!("event=snack_add module=controller status=error error={err}");
        })?;
        info!("event=snack_add module=controller status=ok id={id}");
        self.reload_and_clear()?;
        Ok(id)
    }

    /// Overwrites the selected record with the form buffer.
    pub fn update(&mut self) -> CommandResult<MutationOutcome> {
        let id = self.selection.ok_or(CommandError::NoSelection)?;
        let changed = self.store.update(id, &self.form).inspect_err(|err| {
            warn!("event=snack_update module=controller status=error id={id} error={err}");
        })?;
        let outcome = if changed == 0 {
            warn!("event=snack_update module=controller status=missing id={id}");
            MutationOutcome::MissingRow
        } else {
            info!("event=snack_update module=controller status=ok id={id}");
            MutationOutcome::Applied
        };
        self.reload_and_clear()?;
        Ok(outcome)
    }

    /// Deletes the selected record after an explicit confirmation.
    ///
    /// A declined confirmation leaves mirror, selection and form unchanged.
    pub fn delete(&mut self, decision: DeleteDecision) -> CommandResult<DeleteOutcome> {
        let id = self.selection.ok_or(CommandError::NoSelection)?;
        if decision == DeleteDecision::Declined {
            info!("event=snack_delete module=controller status=declined id={id}");
            return Ok(DeleteOutcome::Declined);
        }

        let changed = self.store.delete(id).inspect_err(|err| {
            warn!("event=snack_delete module=controller status=error id={id} error={err}");
        })?;
        let outcome = if changed == 0 {
            warn!("event=snack_delete module=controller status=missing id={id}");
            DeleteOutcome::MissingRow
        } else {
            info!("event=snack_delete module=controller status=ok id={id}");
            DeleteOutcome::Deleted
        };
        self.reload_and_clear()?;
        Ok(outcome)
    }

    // Post-mutation contract: full list() reload replaces the mirror, then
    // the form and selection are dropped. The just-edited row is not
    // re-selected.
    fn reload_and_clear(&mut self) -> CommandResult<()> {
        self.refresh()?;
        self.clear_selection();
        Ok(())
    }
}
