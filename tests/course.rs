//! Tests for course construction and the default par presets.

use golf_tournament_web::{build_course, CourseError, CourseType, DEFAULT_PARS_18, DEFAULT_PARS_9};

#[test]
fn holes_are_numbered_densely_in_par_order() {
    let course = build_course(&[3, 4, 5, 4]).unwrap();
    assert_eq!(course.len(), 4);
    for (i, hole) in course.iter().enumerate() {
        assert_eq!(hole.number, i as u32 + 1);
    }
    assert_eq!(course[0].par, 3);
    assert_eq!(course[3].par, 4);
}

#[test]
fn empty_par_list_is_rejected() {
    assert_eq!(build_course(&[]), Err(CourseError::Empty));
}

#[test]
fn zero_par_is_rejected_with_hole_number() {
    assert_eq!(build_course(&[4, 0, 5]), Err(CourseError::ZeroPar(2)));
}

#[test]
fn default_presets_sum_to_regulation_par() {
    assert_eq!(DEFAULT_PARS_9.iter().sum::<u32>(), 36);
    assert_eq!(DEFAULT_PARS_18.iter().sum::<u32>(), 72);
    // The back 9 extends the front 9 unchanged.
    assert_eq!(&DEFAULT_PARS_18[..9], &DEFAULT_PARS_9[..]);
}

#[test]
fn course_type_round_trips_through_its_numeric_form() {
    assert_eq!(u8::from(CourseType::Nine), 9);
    assert_eq!(u8::from(CourseType::Eighteen), 18);
    assert_eq!(CourseType::try_from(18).unwrap(), CourseType::Eighteen);
    assert!(CourseType::try_from(12).is_err());
    assert_eq!(CourseType::Nine.holes(), 9);
    assert_eq!(CourseType::Eighteen.default_pars().len(), 18);
}
