//! Property-based tests for vacation bookkeeping and roster lookup.

use proptest::prelude::*;

use roster_engine::calculation::FIXED_PAYOUT_DAYS;
use roster_engine::error::RosterError;
use roster_engine::models::{Employee, Role};
use roster_engine::roster::{EmployeeQuery, Roster};

fn role_strategy() -> impl Strategy<Value = Role> {
    prop::sample::select(Role::ALL.to_vec())
}

fn employee_strategy() -> impl Strategy<Value = Employee> {
    ("[A-Za-z]{1,8}", role_strategy(), any::<bool>()).prop_map(|(name, role, hourly)| {
        if hourly {
            Employee::hourly(name, role)
        } else {
            Employee::salaried(name, role)
        }
    })
}

proptest! {
    #[test]
    fn take_time_off_deducts_or_fails_without_mutation(balance in 0u32..100, days in 1u32..120) {
        let mut employee = Employee::hourly("Tim", Role::Intern).with_vacation_days(balance);
        let result = employee.take_time_off(days);

        if days > balance {
            prop_assert_eq!(
                result,
                Err(RosterError::VacationShortage { requested: days, remaining: balance })
            );
            prop_assert_eq!(employee.vacation_days, balance);
        } else {
            prop_assert_eq!(result, Ok(balance - days));
            prop_assert_eq!(employee.vacation_days, balance - days);
        }
    }

    #[test]
    fn payout_matches_five_day_time_off(balance in 0u32..50) {
        let mut paid_out = Employee::salaried("Louis", Role::Manager).with_vacation_days(balance);
        let mut time_off = paid_out.clone();

        let payout_result = paid_out.payout_holiday();
        let time_off_result = time_off.take_time_off(FIXED_PAYOUT_DAYS);

        prop_assert_eq!(payout_result, time_off_result);
        prop_assert_eq!(paid_out.vacation_days, time_off.vacation_days);
    }

    #[test]
    fn role_filter_returns_exact_subsequence(
        employees in prop::collection::vec(employee_strategy(), 0..30),
        role in role_strategy(),
    ) {
        let roster: Roster = employees.iter().cloned().collect();
        let found = roster.find_employees(&EmployeeQuery::new().with_role(role));
        let expected: Vec<Employee> = employees.into_iter().filter(|e| e.role == role).collect();
        prop_assert_eq!(found, expected);
    }

    #[test]
    fn unfiltered_lookup_returns_everyone_in_order(
        employees in prop::collection::vec(employee_strategy(), 0..30),
    ) {
        let roster: Roster = employees.iter().cloned().collect();
        prop_assert_eq!(roster.find_employees(&EmployeeQuery::new()), employees);
    }

    #[test]
    fn name_filter_ignores_case(name in "[A-Za-z]{1,8}") {
        let employee = Employee::hourly(name.clone(), Role::Worker);
        let upper = EmployeeQuery::new().with_name(name.to_uppercase());
        let lower = EmployeeQuery::new().with_name(name.to_lowercase());
        prop_assert!(upper.matches(&employee));
        prop_assert!(lower.matches(&employee));
    }

    #[test]
    fn name_filter_matches_any_substring_in_any_case(
        name in "[A-Za-z]{1,12}",
        start in any::<prop::sample::Index>(),
        len in any::<prop::sample::Index>(),
        upper in prop::collection::vec(any::<bool>(), 12),
    ) {
        let start = start.index(name.len());
        let len = 1 + len.index(name.len() - start);
        let needle: String = name[start..start + len]
            .chars()
            .zip(&upper)
            .map(|(c, &up)| if up { c.to_ascii_uppercase() } else { c.to_ascii_lowercase() })
            .collect();

        let employee = Employee::hourly(name.clone(), Role::Worker);
        prop_assert!(
            EmployeeQuery::new().with_name(needle.clone()).matches(&employee),
            "{:?} should match {:?}",
            needle,
            name
        );
    }

    #[test]
    fn name_filter_excludes_names_without_needle(
        name in "[a-mA-M]{1,8}",
        needle in "[n-zN-Z]{1,4}",
    ) {
        let employee = Employee::hourly(name, Role::Worker);
        prop_assert!(!EmployeeQuery::new().with_name(needle).matches(&employee));
    }

    #[test]
    fn name_lookup_returns_exactly_the_containing_names(
        employees in prop::collection::vec(employee_strategy(), 0..30),
        needle in "[A-Za-z]{1,2}",
    ) {
        let roster: Roster = employees.iter().cloned().collect();
        let found = roster.find_employees(&EmployeeQuery::new().with_name(needle.clone()));
        let lowered = needle.to_lowercase();
        let expected: Vec<Employee> = employees
            .into_iter()
            .filter(|e| e.name.to_lowercase().contains(&lowered))
            .collect();
        prop_assert_eq!(found, expected);
    }
}
