//! Tests for the strategic region loader


use std::fmt::Write;

/// A period block with plausible winter values. `extra` is spliced in
/// before the closing brace.
pub fn period_block(between: &str, temperature: &str, extra: &str) -> String {
    format!(
        r#"		period={{
			between={{ {between} }}
			temperature={{ {temperature} }}
			temperature_day_night={{ -4.0 -9.0 }}
			no_phenomenon=0.600
			rain_light=0.250
			rain_heavy=0.100
			snow=0.200
			blizzard=0.050
			arctic_water=0.000
			mud=0.100
			sandstorm=0.000
			min_snow_level=0.000
			{extra}
		}}
"#
    )
}

/// Build a full region file in the shape of the real sample data:
/// id 173, name C_DAKOTA, 98 provinces, 12 weather periods, the first of
/// which spans deep winter.
pub fn dakota_region_text() -> String {
    let mut provinces = String::new();
    for i in 0..98u32 {
        let _ = write!(provinces, "{} ", 4000 + i * 7);
    }

    let mut periods = String::new();
    periods.push_str(&period_block("0.0 30.0", "-32.0 -2.0", ""));
    for month in 1..11u8 {
        periods.push_str(&period_block(
            &format!("0.{month} 30.{month}"),
            "-10.0 20.0",
            "",
        ));
    }
    // The 4.11-21.11 period from the sample data: weights sum to 1.85
    periods.push_str(&format!(
        r#"		period={{
			between={{ 4.11 21.11 }}
			temperature={{ -26.0 0.0 }}
			temperature_day_night={{ -4.0 -8.0 }}
			no_phenomenon=0.500
			rain_light=0.250
			rain_heavy=0.100
			snow=0.750
			blizzard=0.150
			arctic_water=0.000
			mud=0.100
			sandstorm=0.000
			min_snow_level=0.250
		}}
"#
    ));

    format!(
        r#"strategic_region={{
	id=173
	name="C_DAKOTA"
	provinces={{
		{provinces}
	}}
	weather={{
{periods}	}}
}}
"#
    )
}
