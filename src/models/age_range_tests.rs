#[cfg(test)]
mod tests {
    use crate::models::age_range::AgeRange;

    #[test]
    fn test_parse_basic_interval() {
        let range = AgeRange::parse("[3,6)").unwrap();
        assert_eq!(range.min, 3);
        assert_eq!(range.max_exclusive, 6);
        assert_eq!(range.max_inclusive(), 5);
    }

    #[test]
    fn test_parse_tolerates_whitespace() {
        let range = AgeRange::parse(" [ 8 , 12 ) ").unwrap();
        assert_eq!(range.min, 8);
        assert_eq!(range.max_exclusive, 12);
    }

    #[test]
    fn test_label_inclusive_upper_bound() {
        assert_eq!(AgeRange::parse("[3,6)").unwrap().label(), "Ages 3-5");
        assert_eq!(AgeRange::parse("[10,14)").unwrap().label(), "Ages 10-13");
    }

    #[test]
    fn test_label_single_year_collapses() {
        assert_eq!(AgeRange::parse("[5,6)").unwrap().label(), "Age 5");
    }

    #[test]
    fn test_empty_string_yields_no_badge() {
        assert_eq!(AgeRange::parse(""), None);
        assert_eq!(AgeRange::label_for(""), None);
    }

    #[test]
    fn test_malformed_strings_yield_none() {
        assert_eq!(AgeRange::parse("3-6"), None);
        assert_eq!(AgeRange::parse("[3,6]"), None);
        assert_eq!(AgeRange::parse("(3,6)"), None);
        assert_eq!(AgeRange::parse("[,6)"), None);
        assert_eq!(AgeRange::parse("[a,b)"), None);
        assert_eq!(AgeRange::parse("ages 3 to 5"), None);
    }

    #[test]
    fn test_reversed_or_empty_bounds_yield_none() {
        assert_eq!(AgeRange::parse("[6,3)"), None);
        assert_eq!(AgeRange::parse("[6,6)"), None);
    }

    #[test]
    fn test_label_for_happy_path() {
        assert_eq!(AgeRange::label_for("[3,6)"), Some("Ages 3-5".to_string()));
    }
}
