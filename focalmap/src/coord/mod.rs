//! Coordinate module
//!
//! Integer grid coordinates for map parcels and the strict `"x,y"` parser used
//! by district definitions.

mod types;

pub use types::{CoordError, ParcelCoord};

/// Parses a parcel string of the form `"x,y"`.
///
/// Whitespace around each component is ignored. Anything else (missing or
/// extra components, non-integer text) is rejected: a district whose parcel
/// list contains such an entry is corrupt and must not be partially loaded.
///
/// # Examples
///
/// ```
/// use focalmap::coord::{parse_parcel, ParcelCoord};
///
/// assert_eq!(parse_parcel("-12,40").unwrap(), ParcelCoord::new(-12, 40));
/// assert!(parse_parcel("12").is_err());
/// ```
pub fn parse_parcel(input: &str) -> Result<ParcelCoord, CoordError> {
    let mut parts = input.split(',');
    let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(CoordError::WrongArity(input.to_string()));
    };

    Ok(ParcelCoord::new(
        parse_component(input, x)?,
        parse_component(input, y)?,
    ))
}

fn parse_component(input: &str, component: &str) -> Result<i32, CoordError> {
    component
        .trim()
        .parse()
        .map_err(|_| CoordError::InvalidComponent {
            input: input.to_string(),
            component: component.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positive_and_negative() {
        assert_eq!(parse_parcel("3,-4").unwrap(), ParcelCoord::new(3, -4));
        assert_eq!(parse_parcel("-150,150").unwrap(), ParcelCoord::new(-150, 150));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(parse_parcel(" 3 , 4 ").unwrap(), ParcelCoord::new(3, 4));
    }

    #[test]
    fn test_parse_rejects_single_component() {
        assert!(matches!(
            parse_parcel("3").unwrap_err(),
            CoordError::WrongArity(_)
        ));
    }

    #[test]
    fn test_parse_rejects_extra_component() {
        assert!(matches!(
            parse_parcel("1,2,3").unwrap_err(),
            CoordError::WrongArity(_)
        ));
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        let err = parse_parcel("a,4").unwrap_err();
        assert_eq!(
            err,
            CoordError::InvalidComponent {
                input: "a,4".to_string(),
                component: "a".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_rejects_empty_component() {
        assert!(parse_parcel(",4").is_err());
        assert!(parse_parcel("").is_err());
    }

    #[test]
    fn test_coord_ordering_is_x_then_y() {
        let mut coords = vec![
            ParcelCoord::new(2, 0),
            ParcelCoord::new(1, 5),
            ParcelCoord::new(1, -1),
        ];
        coords.sort();
        assert_eq!(
            coords,
            vec![
                ParcelCoord::new(1, -1),
                ParcelCoord::new(1, 5),
                ParcelCoord::new(2, 0),
            ]
        );
    }

    #[test]
    fn test_coord_serializes_as_pair() {
        let json = serde_json::to_string(&ParcelCoord::new(7, -2)).unwrap();
        assert_eq!(json, "[7,-2]");
        let back: ParcelCoord = serde_json::from_str("[7,-2]").unwrap();
        assert_eq!(back, ParcelCoord::new(7, -2));
    }

    #[test]
    fn test_display_matches_parcel_format() {
        let coord = ParcelCoord::new(-1, 9);
        assert_eq!(parse_parcel(&coord.to_string()).unwrap(), coord);
    }
}
