#[cfg(test)]
mod tests {
    use crate::domain::answers::mentee::fixtures::complete_from_scratch;
    use crate::domain::answers::mentor::fixtures::complete_mentor;
    use crate::domain::answers::{Characteristic, MentorAnswers, ModuleAnswers};
    use crate::domain::dashboard::orchestrator::{Dashboard, Route};
    use crate::domain::foundation::{ErrorCode, Identity, ModuleId, ModuleProgress, ModuleStatus};
    use crate::domain::scoring::{Point, Positioned};
    use crate::domain::wizard::{EditOutcome, ModuleWizard};

    fn dashboard() -> Dashboard {
        Dashboard::new(Identity::new("Ana", "ana@example.com").unwrap())
    }

    fn started_mentor() -> Dashboard {
        let mut dashboard = dashboard();
        dashboard.open_module(ModuleId::Mentor).unwrap();
        let answers = MentorAnswers {
            story: "Twelve years in design".to_string(),
            ..Default::default()
        };
        dashboard
            .replace_answers(ModuleId::Mentor, answers.into())
            .unwrap();
        dashboard.exit_module();
        dashboard
    }

    #[test]
    fn test_fresh_dashboard_locks_everything_but_mentor() {
        let dashboard = dashboard();
        assert!(!dashboard.is_locked(ModuleId::Mentor));
        assert!(dashboard.is_locked(ModuleId::Mentee));
        assert!(dashboard.is_locked(ModuleId::Method));
        assert!(dashboard.is_locked(ModuleId::Delivery));
        assert_eq!(dashboard.route(), Route::Overview);
    }

    #[test]
    fn test_opening_locked_module_fails() {
        let mut dashboard = dashboard();
        let err = dashboard.open_module(ModuleId::Method).unwrap_err();
        assert_eq!(err.code, ErrorCode::ModuleLocked);
        assert_eq!(err.details.get("prerequisite").map(String::as_str), Some("mentor"));
        assert_eq!(dashboard.active(), None);
    }

    #[test]
    fn test_starting_mentor_unlocks_siblings() {
        let mut dashboard = started_mentor();
        assert!(!dashboard.is_locked(ModuleId::Delivery));
        let route = dashboard.open_module(ModuleId::Delivery).unwrap();
        assert_eq!(
            route,
            Route::Module {
                module: ModuleId::Delivery,
                step: 1
            }
        );
    }

    #[test]
    fn test_route_entry_requires_prior_progress() {
        let mut dashboard = started_mentor();
        assert_eq!(dashboard.route_entry(ModuleId::Mentee), Route::Overview);
        assert_eq!(
            dashboard.route_entry(ModuleId::Mentor),
            Route::Module {
                module: ModuleId::Mentor,
                step: 2
            }
        );
    }

    #[test]
    fn test_route_entry_on_fresh_dashboard_lands_on_overview() {
        let mut dashboard = dashboard();
        assert_eq!(dashboard.route_entry(ModuleId::Mentor), Route::Overview);
        assert_eq!(dashboard.route_entry(ModuleId::Delivery), Route::Overview);
    }

    #[test]
    fn test_commands_require_active_module() {
        let mut dashboard = started_mentor();
        let err = dashboard.advance(ModuleId::Mentor).unwrap_err();
        assert_eq!(err.code, ErrorCode::ModuleNotActive);

        dashboard.open_module(ModuleId::Mentee).unwrap();
        let err = dashboard
            .replace_answers(ModuleId::Mentor, ModuleAnswers::empty(ModuleId::Mentor))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ModuleNotActive);
    }

    #[test]
    fn test_submit_returns_to_overview() {
        let mut dashboard = dashboard();
        dashboard.open_module(ModuleId::Mentor).unwrap();
        dashboard
            .replace_answers(ModuleId::Mentor, complete_mentor().into())
            .unwrap();
        while dashboard.module(ModuleId::Mentor).can_advance() {
            dashboard.advance(ModuleId::Mentor).unwrap();
        }
        assert!(dashboard.module(ModuleId::Mentor).is_at_completion());

        dashboard.submit_for_review(ModuleId::Mentor).unwrap();
        assert_eq!(dashboard.route(), Route::Overview);
        let card = dashboard.overview();
        assert_eq!(
            card.card(ModuleId::Mentor).map(|c| c.progress),
            Some(ModuleProgress::UnderReview)
        );
    }

    #[test]
    fn test_edits_after_review_are_read_only() {
        let mut dashboard = dashboard();
        dashboard.restore_module(ModuleWizard::restore(
            complete_mentor().into(),
            ModuleStatus::UnderReview,
            true,
        ));
        dashboard.open_module(ModuleId::Mentor).unwrap();
        let outcome = dashboard
            .replace_answers(ModuleId::Mentor, ModuleAnswers::empty(ModuleId::Mentor))
            .unwrap();
        assert_eq!(outcome, EditOutcome::ReadOnly);
    }

    #[test]
    fn test_progress_flags_follow_started_modules() {
        let mut dashboard = started_mentor();
        dashboard.open_module(ModuleId::Mentee).unwrap();
        dashboard
            .replace_answers(ModuleId::Mentee, complete_from_scratch().into())
            .unwrap();

        let flags = dashboard.progress_flags();
        assert!(flags.mentor);
        assert!(flags.mentee);
        assert!(!flags.method);
        assert!(!flags.delivery);

        let submission = dashboard.submission(ModuleId::Mentee);
        assert_eq!(submission.module, ModuleId::Mentee);
        assert_eq!(submission.progress, flags);
        assert_eq!(submission.identity.email(), "ana@example.com");
    }

    #[test]
    fn test_logout_resets_all_modules() {
        let mut dashboard = started_mentor();
        dashboard.open_module(ModuleId::Mentor).unwrap();
        dashboard.logout();

        assert_eq!(dashboard.route(), Route::Overview);
        assert!(!dashboard.module(ModuleId::Mentor).started());
        assert!(dashboard.is_locked(ModuleId::Mentee));
        assert_eq!(
            dashboard.module(ModuleId::Mentor).answers(),
            &ModuleAnswers::empty(ModuleId::Mentor)
        );
    }

    fn mentor_placement(dashboard: &Dashboard) -> Point {
        match dashboard.module(ModuleId::Mentor).answers() {
            ModuleAnswers::Mentor(answers) => answers.characteristics[0].position(),
            other => panic!("unexpected answers {:?}", other),
        }
    }

    #[test]
    fn test_placement_radius_applies_to_restored_and_reset_modules() {
        let mut dashboard = dashboard();
        dashboard.set_placement_radius(20.0);

        let mut wide = Characteristic::new("Bold");
        wide.set_position(Point::new(40.0, 0.0));
        let answers = MentorAnswers {
            characteristics: vec![wide],
            ..Default::default()
        };
        dashboard.restore_module(ModuleWizard::restore(
            answers.clone().into(),
            ModuleStatus::UnderReview,
            true,
        ));
        assert_eq!(mentor_placement(&dashboard), Point::new(20.0, 0.0));

        dashboard.logout();
        dashboard.open_module(ModuleId::Mentor).unwrap();
        dashboard
            .replace_answers(ModuleId::Mentor, answers.into())
            .unwrap();
        assert_eq!(mentor_placement(&dashboard), Point::new(20.0, 0.0));
    }

    #[test]
    fn test_admin_completion_does_not_need_open_module() {
        let mut dashboard = dashboard();
        dashboard.restore_module(ModuleWizard::restore(
            complete_mentor().into(),
            ModuleStatus::UnderReview,
            true,
        ));
        dashboard.mark_completed(ModuleId::Mentor).unwrap();
        assert_eq!(
            dashboard.module(ModuleId::Mentor).status(),
            ModuleStatus::Completed
        );
    }

    #[test]
    fn test_route_serializes_with_view_tag() {
        let route = Route::Module {
            module: ModuleId::Method,
            step: 2,
        };
        let json = serde_json::to_value(route).unwrap();
        assert_eq!(json["view"], "module");
        assert_eq!(json["module"], "method");
        assert_eq!(json["step"], 2);
    }
}
