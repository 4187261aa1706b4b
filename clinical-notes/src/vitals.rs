use rand::Rng;
use std::ops::RangeInclusive;

pub const SYSTOLIC_RANGE: RangeInclusive<u32> = 90..=160;
pub const DIASTOLIC_RANGE: RangeInclusive<u32> = 60..=100;
pub const HEART_RATE_RANGE: RangeInclusive<u32> = 60..=100;
pub const RESPIRATORY_RATE_RANGE: RangeInclusive<u32> = 12..=20;
pub const TEMPERATURE_RANGE_F: RangeInclusive<f64> = 97.0..=99.5;
pub const OXYGEN_SATURATION_RANGE: RangeInclusive<u32> = 95..=100;

/// One set of vital signs, each value drawn independently
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VitalSigns {
    pub systolic: u32,
    pub diastolic: u32,
    pub heart_rate: u32,
    pub respiratory_rate: u32,
    /// Fahrenheit, one decimal place
    pub temperature_f: f64,
    pub oxygen_saturation: u32,
}

impl VitalSigns {
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let systolic = rng.gen_range(SYSTOLIC_RANGE);
        let diastolic = rng.gen_range(DIASTOLIC_RANGE);
        let heart_rate = rng.gen_range(HEART_RATE_RANGE);
        let respiratory_rate = rng.gen_range(RESPIRATORY_RATE_RANGE);
        let temperature_f = (rng.gen_range(TEMPERATURE_RANGE_F) * 10.0).round() / 10.0;
        let oxygen_saturation = rng.gen_range(OXYGEN_SATURATION_RANGE);

        Self {
            systolic,
            diastolic,
            heart_rate,
            respiratory_rate,
            temperature_f,
            oxygen_saturation,
        }
    }

    /// `BP 120/80, HR 72, RR 16, Temp 98.6F, O2 Sat 98%`
    pub fn full_line(&self) -> String {
        format!(
            "BP {}/{}, HR {}, RR {}, Temp {:.1}F, O2 Sat {}%",
            self.systolic,
            self.diastolic,
            self.heart_rate,
            self.respiratory_rate,
            self.temperature_f,
            self.oxygen_saturation
        )
    }

    /// `Vitals: 120/80 mmHg, 72 bpm, 98.6F`
    pub fn brief_line(&self) -> String {
        format!(
            "Vitals: {}/{} mmHg, {} bpm, {:.1}F",
            self.systolic, self.diastolic, self.heart_rate, self.temperature_f
        )
    }
}
