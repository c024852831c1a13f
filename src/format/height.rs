use serde::Serialize;

const MIN_FEET: u32 = 4;
const MAX_FEET: u32 = 7;
const INCHES_PER_FOOT: u32 = 12;

/// One selectable height, e.g. value `6'2"`, label `6ft 2`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeightOption {
    pub value: String,
    pub label: String,
}

/// Every selectable height from 4'0" through 7'11", in order
pub fn generate_height_options() -> Vec<HeightOption> {
    let mut options = Vec::new();

    for feet in MIN_FEET..=MAX_FEET {
        for inches in 0..INCHES_PER_FOOT {
            options.push(HeightOption {
                value: height_value(feet, inches),
                label: height_label(feet, inches),
            });
        }
    }

    options
}

/// Render a height stored in total inches using the selector notation
pub fn format_height(total_inches: u32) -> String {
    height_value(
        total_inches / INCHES_PER_FOOT,
        total_inches % INCHES_PER_FOOT,
    )
}

fn height_value(feet: u32, inches: u32) -> String {
    format!("{}'{}\"", feet, inches)
}

fn height_label(feet: u32, inches: u32) -> String {
    format!("{}ft {}", feet, inches)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_cross_product() {
        let options = generate_height_options();

        assert_eq!(options.len(), 48);
        assert_eq!(options[0].value, "4'0\"");
        assert_eq!(options[0].label, "4ft 0");
        assert_eq!(options[47].value, "7'11\"");
        assert_eq!(options[47].label, "7ft 11");
    }

    #[test]
    fn test_options_are_ordered() {
        let options = generate_height_options();

        // 5'0" follows 4'11"
        assert_eq!(options[11].value, "4'11\"");
        assert_eq!(options[12].value, "5'0\"");
    }

    #[test]
    fn test_format_height_from_inches() {
        assert_eq!(format_height(74), "6'2\"");
        assert_eq!(format_height(84), "7'0\"");
    }
}
