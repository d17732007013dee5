/// Feet of length per local unit along the y-axis
pub const FEET_PER_LENGTH_UNIT: f64 = 2.0;
/// Inches of width per local unit along the x-axis
pub const INCHES_PER_WIDTH_UNIT: f64 = 12.0;
/// Inches of thickness per local unit of extrusion
pub const INCHES_PER_THICKNESS_UNIT: f64 = 10.0;

pub fn length_to_feet(units: f64) -> f64 {
    units * FEET_PER_LENGTH_UNIT
}

pub fn feet_to_length(feet: f64) -> f64 {
    feet / FEET_PER_LENGTH_UNIT
}

pub fn width_to_inches(units: f64) -> f64 {
    units * INCHES_PER_WIDTH_UNIT
}

pub fn inches_to_width(inches: f64) -> f64 {
    inches / INCHES_PER_WIDTH_UNIT
}

pub fn thickness_to_inches(units: f64) -> f64 {
    units * INCHES_PER_THICKNESS_UNIT
}

pub fn inches_to_thickness(inches: f64) -> f64 {
    inches / INCHES_PER_THICKNESS_UNIT
}
