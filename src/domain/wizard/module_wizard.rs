//! ModuleWizard - the per-module state machine.
//!
//! Holds the answer record, the review status, the step cursor and the
//! started flag of one module. Every mutation goes through this type, so the
//! read-only rule for reviewed modules is enforced here and nowhere else.

use serde::{Deserialize, Serialize};

use crate::domain::answers::ModuleAnswers;
use crate::domain::foundation::{
    DomainError, ErrorCode, ModuleId, ModuleProgress, ModuleStatus, StateMachine,
};
use crate::domain::scoring::DEFAULT_RADIUS;

/// Result of replacing a module's answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditOutcome {
    /// The record changed and was stored.
    Applied,
    /// The new record equals the stored one.
    Unchanged,
    /// The module is under review or completed; nothing was stored.
    ReadOnly,
}

impl EditOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, EditOutcome::Applied)
    }
}

/// State of one diagnostic module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleWizard {
    module: ModuleId,
    status: ModuleStatus,
    step: usize,
    started: bool,
    answers: ModuleAnswers,
    #[serde(skip, default = "default_placement_radius")]
    placement_radius: f64,
}

fn default_placement_radius() -> f64 {
    DEFAULT_RADIUS
}

impl ModuleWizard {
    /// Fresh module: empty answers, status todo, cursor on step 1.
    pub fn new(module: ModuleId) -> Self {
        Self {
            module,
            status: ModuleStatus::Todo,
            step: 1,
            started: false,
            answers: ModuleAnswers::empty(module),
            placement_radius: DEFAULT_RADIUS,
        }
    }

    /// Rebuilds a module from persisted answers and status.
    ///
    /// The cursor is derived from the answers, never stored.
    pub fn restore(answers: ModuleAnswers, status: ModuleStatus, started: bool) -> Self {
        let mut wizard = Self {
            module: answers.module(),
            status,
            step: 1,
            started,
            answers,
            placement_radius: DEFAULT_RADIUS,
        };
        wizard.answers.clamp_placements(wizard.placement_radius);
        wizard.enter();
        wizard
    }

    /// Radius of the disc every placement is kept on.
    ///
    /// Placements already stored are pulled onto the new disc.
    pub fn set_placement_radius(&mut self, radius: f64) {
        self.placement_radius = radius;
        self.answers.clamp_placements(radius);
    }

    // ───────────────────────────────────────────────────────────────
    // Accessors
    // ───────────────────────────────────────────────────────────────

    pub fn module(&self) -> ModuleId {
        self.module
    }

    pub fn status(&self) -> ModuleStatus {
        self.status
    }

    /// Current 1-based step; equals `completion_step()` on the completion view.
    pub fn step(&self) -> usize {
        self.step
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn answers(&self) -> &ModuleAnswers {
        &self.answers
    }

    pub fn progress(&self) -> ModuleProgress {
        self.status.progress(self.started)
    }

    pub fn is_read_only(&self) -> bool {
        self.status.is_read_only()
    }

    pub fn step_count(&self) -> usize {
        self.answers.step_count()
    }

    pub fn completion_step(&self) -> usize {
        self.answers.completion_step()
    }

    pub fn resume_step(&self) -> usize {
        self.answers.resume_step()
    }

    pub fn is_at_completion(&self) -> bool {
        self.step == self.completion_step()
    }

    pub fn step_title(&self) -> Option<&'static str> {
        self.answers.step_title(self.step)
    }

    pub fn can_advance(&self) -> bool {
        self.answers.can_advance(self.status, self.step)
    }

    // ───────────────────────────────────────────────────────────────
    // Navigation
    // ───────────────────────────────────────────────────────────────

    /// Places the cursor where the user should land when opening the module.
    ///
    /// Editable modules resume at the first step lacking content; reviewed
    /// modules open on step 1 for browsing.
    pub fn enter(&mut self) -> usize {
        self.step = if self.is_read_only() {
            1
        } else {
            self.answers.resume_step()
        };
        self.step
    }

    /// Moves to the next step when the gate allows it.
    pub fn advance(&mut self) -> Result<usize, DomainError> {
        if self.is_at_completion() {
            return Err(DomainError::new(
                ErrorCode::AlreadyAtCompletion,
                format!("{} is already on its completion view", self.module),
            ));
        }

        if !self.can_advance() {
            return Err(DomainError::new(
                ErrorCode::StepIncomplete,
                format!(
                    "Step {} of {} is not complete",
                    self.step,
                    self.module.display_name()
                ),
            )
            .with_detail("step", self.step.to_string()));
        }

        self.step += 1;
        Ok(self.step)
    }

    /// Moves to the previous step; stays on step 1.
    pub fn back(&mut self) -> usize {
        self.step = self.step.saturating_sub(1).max(1);
        self.step
    }

    // ───────────────────────────────────────────────────────────────
    // Editing
    // ───────────────────────────────────────────────────────────────

    /// Replaces the whole answer record.
    ///
    /// Items without an id take a stable one and placements are clamped onto
    /// the disc before the record is compared with the stored one. The first
    /// replacement that changes the record marks the module as started. A
    /// branch change may shrink the step sequence, so the cursor is clamped
    /// back into the new range.
    pub fn replace_answers(
        &mut self,
        mut answers: ModuleAnswers,
    ) -> Result<EditOutcome, DomainError> {
        if answers.module() != self.module {
            return Err(DomainError::new(
                ErrorCode::ModuleMismatch,
                format!(
                    "Cannot store {} answers in the {} module",
                    answers.module(),
                    self.module
                ),
            ));
        }

        if self.is_read_only() {
            return Ok(EditOutcome::ReadOnly);
        }

        answers.assign_item_ids(&self.answers);
        answers.clamp_placements(self.placement_radius);
        if answers == self.answers {
            return Ok(EditOutcome::Unchanged);
        }

        self.answers = answers;
        self.started = true;
        self.step = self.answers.clamp_step(self.step);
        Ok(EditOutcome::Applied)
    }

    // ───────────────────────────────────────────────────────────────
    // Status transitions
    // ───────────────────────────────────────────────────────────────

    /// Sends the module for review. Only allowed from the completion view.
    pub fn submit_for_review(&mut self) -> Result<(), DomainError> {
        if !self.is_at_completion() {
            return Err(DomainError::new(
                ErrorCode::NotAtCompletion,
                format!("{} can only be submitted from its completion view", self.module),
            ));
        }

        self.status = self.status.transition_to(ModuleStatus::UnderReview)?;
        Ok(())
    }

    /// Admin decision closing the review.
    pub fn mark_completed(&mut self) -> Result<(), DomainError> {
        self.status = self.status.transition_to(ModuleStatus::Completed)?;
        Ok(())
    }
}
