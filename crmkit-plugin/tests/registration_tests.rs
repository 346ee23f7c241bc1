use crmkit_plugin::{Invocation, PluginStage, StepRegistration, verify_registration};
use proptest::prelude::*;
use uuid::Uuid;

fn stage_strategy() -> impl Strategy<Value = PluginStage> {
    prop_oneof![
        Just(PluginStage::PreValidation),
        Just(PluginStage::Pre),
        Just(PluginStage::Post),
    ]
}

fn invocation_strategy() -> impl Strategy<Value = Invocation> {
    ("[a-z]{1,12}", "[A-Za-z]{1,12}", stage_strategy(), 1u32..=8).prop_map(
        |(entity, message, stage, depth)| Invocation {
            message,
            stage,
            depth,
            primary_entity_name: entity,
            user_id: Uuid::new_v4(),
            initiating_user_id: Uuid::new_v4(),
            target: None,
            target_reference: None,
            assignee: None,
            state: None,
            status: None,
        },
    )
}

proptest! {
    #[test]
    fn absent_rules_admit_every_invocation(invocation in invocation_strategy()) {
        prop_assert!(verify_registration("AnyPlugin", None, &invocation).is_ok());
    }

    #[test]
    fn all_wildcard_rule_admits_every_invocation(invocation in invocation_strategy()) {
        let steps = [StepRegistration::new()];
        prop_assert!(verify_registration("AnyPlugin", Some(&steps), &invocation).is_ok());
    }

    #[test]
    fn empty_rules_admit_nothing(invocation in invocation_strategy()) {
        prop_assert!(verify_registration("AnyPlugin", Some(&[]), &invocation).is_err());
    }

    #[test]
    fn exact_rule_admits_its_own_invocation(invocation in invocation_strategy()) {
        let steps = [StepRegistration::new()
            .with_entity(invocation.primary_entity_name.clone())
            .with_message(invocation.message.clone())
            .with_stage(invocation.stage)
            .with_maximum_depth(invocation.depth as i32)];
        prop_assert!(verify_registration("AnyPlugin", Some(&steps), &invocation).is_ok());
    }

    #[test]
    fn depth_bound_is_inclusive_upper(invocation in invocation_strategy(), slack in 0i32..4) {
        let steps = [StepRegistration::new()
            .with_maximum_depth(invocation.depth as i32 + slack)];
        prop_assert!(verify_registration("AnyPlugin", Some(&steps), &invocation).is_ok());
    }
}
