mod tests {
    use approx::assert_relative_eq;

    use crate::length::{AU_TO_CM, EARTH_RADIUS_KM, Length};

    #[test]
    fn test_length_conversions() {
        let length_au = Length::from_au(1.0);
        assert_relative_eq!(length_au.to_cm(), AU_TO_CM);

        let length_cm = Length::from_cm(AU_TO_CM);
        assert_relative_eq!(length_cm.to_au(), 1.0);

        let radius = Length::from_km(EARTH_RADIUS_KM);
        assert_relative_eq!(radius.to_earth_radii(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(radius.to_cm(), 6.378e8, max_relative = 1e-12);
    }

    #[test]
    fn test_earth_radii_constructor() {
        let radius = Length::from_earth_radii(2.0);
        assert_relative_eq!(radius.to_km(), 12756.0, max_relative = 1e-12);
    }

    #[test]
    fn test_length_arithmetic_operations() {
        let length1 = Length::from_au(5.0);
        let length2 = Length::from_au(3.0);

        assert_relative_eq!((length1 + length2).to_au(), 8.0);
        assert_relative_eq!((length1 - length2).to_au(), 2.0);
        assert_relative_eq!((length1 * 2.0).to_au(), 10.0);
        assert_relative_eq!((length1 / 2.0).to_au(), 2.5);
        assert_relative_eq!((1.5 * length1).to_au(), 7.5);
        assert_relative_eq!(length1 / length2, 5.0 / 3.0);
    }

    #[test]
    fn test_length_ordering() {
        assert!(Length::from_au(0.5) < Length::from_km(1.0e8));
        assert_eq!(Length::zero().to_km(), 0.0);
    }
}
