//! Property-based tests for the registration schema.

use dailydose_validator::prelude::*;
use proptest::prelude::*;

fn validate(record: &Registration) -> Evaluation {
    FormValidator::new().validate(record)
}

prop_compose! {
    /// Records that satisfy every rule by construction.
    fn valid_records()(
        username in "[a-zA-Z][a-zA-Z0-9]{2,39}",
        email in "[a-z]{1,10}@[a-z]{1,10}\\.[a-z]{2,4}",
        phone in prop_oneof![Just(String::new()), "[0-9]{8,15}"],
        password in "[a-zA-Z0-9]{6,40}",
    ) -> Registration {
        Registration {
            username,
            email,
            phone,
            confirm_password: password.clone(),
            password,
            profile_picture: None,
        }
    }
}

prop_compose! {
    /// Arbitrary records, valid or not.
    fn any_records()(
        username in ".{0,50}",
        email in ".{0,50}",
        phone in ".{0,30}",
        password in ".{0,50}",
        confirm_password in ".{0,50}",
    ) -> Registration {
        Registration {
            username,
            email,
            phone,
            password,
            confirm_password,
            profile_picture: None,
        }
    }
}

proptest! {
    #[test]
    fn valid_records_are_accepted(record in valid_records()) {
        let report = validate(&record);
        prop_assert!(report.accepted(), "unexpected errors: {:?}", report.errors());
    }

    #[test]
    fn validation_is_idempotent(record in any_records()) {
        prop_assert_eq!(validate(&record), validate(&record));
    }

    #[test]
    fn empty_username_always_reports_required(record in any_records()) {
        let record = Registration { username: String::new(), ..record };
        prop_assert_eq!(
            validate(&record).error(FieldId::Username),
            Some(MessageKey::UsernameRequired)
        );
    }

    #[test]
    fn empty_confirm_never_reports_mismatch(record in any_records()) {
        let record = Registration { confirm_password: String::new(), ..record };
        prop_assert_eq!(
            validate(&record).error(FieldId::ConfirmPassword),
            Some(MessageKey::ConfirmPasswordRequired)
        );
    }

    #[test]
    fn empty_phone_never_errors(record in any_records()) {
        let record = Registration { phone: String::new(), ..record };
        prop_assert_eq!(validate(&record).error(FieldId::Phone), None);
    }

    #[test]
    fn errors_stay_on_their_own_field(record in any_records()) {
        let report = validate(&record);
        for (field, key) in report.iter() {
            let allowed: &[MessageKey] = match field {
                FieldId::Username => &[
                    MessageKey::UsernameRequired,
                    MessageKey::UsernameMin,
                    MessageKey::UsernameMax,
                ],
                FieldId::Email => &[MessageKey::EmailRequired, MessageKey::EmailInvalid],
                FieldId::Phone => &[MessageKey::PhoneMin],
                FieldId::Password => &[
                    MessageKey::PasswordRequired,
                    MessageKey::PasswordMin,
                    MessageKey::PasswordMax,
                ],
                FieldId::ConfirmPassword => &[
                    MessageKey::ConfirmPasswordRequired,
                    MessageKey::PasswordsMustMatch,
                ],
            };
            prop_assert!(allowed.contains(&key), "{key:?} reported on {field:?}");
        }
    }

    #[test]
    fn accepted_iff_no_errors(record in any_records()) {
        let report = validate(&record);
        prop_assert_eq!(report.accepted(), report.errors().is_empty());
    }
}
