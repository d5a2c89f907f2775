//! Wire-level encoding tests for the documented device examples.

use super::*;
use luxafor_errors::ValidationError;

fn hex(report: [u8; REPORT_LEN]) -> String {
    format_report(&report)
}

#[test]
fn set_color_all_leds_without_fade_is_static() {
    let command = Command::set_color(LedTarget::AllLeds, Color::new(0xC8, 0x14, 0x2A), 0);
    assert_eq!(hex(command.encode()), "00:01:FF:C8:14:2A:00:00:00");
}

#[test]
fn set_color_back_side_without_fade_is_static() {
    let command = Command::set_color(LedTarget::AllBackSide, Color::new(0xC8, 0x14, 0x2A), 0);
    assert_eq!(hex(command.encode()), "00:01:42:C8:14:2A:00:00:00");
}

#[test]
fn set_color_single_led_without_fade_is_static() -> Result<(), ValidationError> {
    let command = Command::set_color(LedTarget::of_index(5)?, Color::new(0xC8, 0x14, 0x2A), 0);
    assert_eq!(hex(command.encode()), "00:01:05:C8:14:2A:00:00:00");
    Ok(())
}

#[test]
fn set_color_single_led_with_fade_is_fading() -> Result<(), ValidationError> {
    let command = Command::set_color(LedTarget::of_index(5)?, Color::new(0xC8, 0x14, 0x2A), 64);
    assert!(matches!(command, Command::FadeColor { speed: 64, .. }));
    assert_eq!(hex(command.encode()), "00:02:05:C8:14:2A:40:00:00");
    Ok(())
}

#[test]
fn blink_without_repeat_leaves_last_byte_empty() {
    let command = Command::blink(LedTarget::AllFrontSide, Color::new(0xD0, 0x20, 0x20), 64, 0);
    assert_eq!(hex(command.encode()), "00:03:41:D0:20:20:40:00:00");
}

#[test]
fn blink_with_repeat_fills_last_byte() {
    let command = Command::blink(LedTarget::AllFrontSide, Color::new(0xD0, 0x20, 0x20), 64, 3);
    assert_eq!(hex(command.encode()), "00:03:41:D0:20:20:40:00:03");
}

#[test]
fn wave_places_repeat_before_speed() {
    let command = Command::wave(WaveType::OverlappingShort, Color::new(0xCC, 0xCC, 0x20), 5, 2);
    assert_eq!(hex(command.encode()), "00:04:03:CC:CC:20:00:02:05");
}

#[test]
fn pattern_carries_code_and_repeat() {
    let command = Command::pattern(PatternType::RainbowWave, 3);
    assert_eq!(hex(command.encode()), "00:06:08:03:00:00:00:00:00");
}

#[test]
fn command_codes_per_kind() {
    let color = Color::RED;
    assert_eq!(Command::set_color(LedTarget::AllLeds, color, 0).code(), 0x01);
    assert_eq!(Command::set_color(LedTarget::AllLeds, color, 1).code(), 0x02);
    assert_eq!(Command::blink(LedTarget::AllLeds, color, 1, 0).code(), 0x03);
    assert_eq!(Command::wave(WaveType::Short, color, 1, 0).code(), 0x04);
    assert_eq!(Command::pattern(PatternType::Police, 0).code(), 0x06);
}

#[test]
fn wave_and_pattern_have_no_target() {
    assert_eq!(Command::wave(WaveType::Long, Color::BLUE, 1, 1).target(), None);
    assert_eq!(Command::pattern(PatternType::Police, 1).target(), None);
    assert_eq!(
        Command::blink(LedTarget::AllBackSide, Color::BLUE, 1, 1).target(),
        Some(LedTarget::AllBackSide)
    );
}

#[test]
fn raw_report_is_sent_verbatim() {
    let raw = RawReport([0x00, 0x05, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07]);
    assert_eq!(raw.to_report(), raw.0);

    let command = Command::pattern(PatternType::TrafficLights, 1);
    assert_eq!(RawReport::from(command).to_report(), command.to_report());
}

#[test]
fn format_report_handles_empty_input() {
    assert_eq!(format_report(&[]), "");
    assert_eq!(format_report(&[0x0A]), "0A");
}
