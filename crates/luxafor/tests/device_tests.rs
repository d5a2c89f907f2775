//! Wire output of every device operation, captured through the mock
//! transport after the device has been dropped.

use luxafor::{Color, Device, DeviceConfig, LedTarget, LuxaforResult, PatternType, WaveType};
use luxafor_hid_common::mock::{MockHidTransport, TransportEvent};
use luxafor_test_helpers::prelude::*;

fn open_device() -> (Device, MockHidTransport) {
    let probe = MockHidTransport::new(0x04D8, 0xF372, "/dev/hidraw0");
    let device = Device::new(Box::new(probe.clone()), DeviceConfig::default());
    (device, probe)
}

const SAMPLE: Color = Color::new(0xC8, 0x14, 0x2A);
const BLINK: Color = Color::new(0xD0, 0x20, 0x20);

#[test]
fn dispose_closes_underlying_transport() {
    let (device, probe) = open_device();
    assert_eq!(probe.close_count(), 0);

    drop(device);

    assert_eq!(probe.close_count(), 1);
}

#[tokio::test]
async fn set_color_to_every_led_without_fade_uses_static_mode() -> LuxaforResult<()> {
    let (mut device, probe) = open_device();
    assert!(device.set_color(LedTarget::AllLeds, SAMPLE, 0).await?);
    drop(device);

    assert_report!(probe.get_write_history(), ["00:01:FF:C8:14:2A:00:00:00"]);
    Ok(())
}

#[tokio::test]
async fn set_color_to_back_side_without_fade_uses_static_mode() -> LuxaforResult<()> {
    let (mut device, probe) = open_device();
    device.set_color(LedTarget::AllBackSide, SAMPLE, 0).await?;
    drop(device);

    assert_report!(probe.get_write_history(), ["00:01:42:C8:14:2A:00:00:00"]);
    Ok(())
}

#[tokio::test]
async fn set_color_to_single_led_without_fade_uses_static_mode() -> LuxaforResult<()> {
    let (mut device, probe) = open_device();
    device.set_color(LedTarget::of_index(5)?, SAMPLE, 0).await?;
    drop(device);

    assert_report!(probe.get_write_history(), ["00:01:05:C8:14:2A:00:00:00"]);
    Ok(())
}

#[tokio::test]
async fn set_color_to_single_led_with_fade_uses_fading_mode() -> LuxaforResult<()> {
    let (mut device, probe) = open_device();
    device.set_color(LedTarget::of_index(5)?, SAMPLE, 64).await?;
    drop(device);

    assert_report!(probe.get_write_history(), ["00:02:05:C8:14:2A:40:00:00"]);
    Ok(())
}

#[tokio::test]
async fn set_color_through_all_leds_port_matches_device_call() -> LuxaforResult<()> {
    let (mut device, probe) = open_device();
    device.set_color(LedTarget::AllLeds, SAMPLE, 64).await?;
    device.all_leds().set_color(SAMPLE, 64).await?;
    drop(device);

    assert_report!(
        probe.get_write_history(),
        ["00:02:FF:C8:14:2A:40:00:00", "00:02:FF:C8:14:2A:40:00:00"]
    );
    Ok(())
}

#[tokio::test]
async fn set_color_through_front_side_port_matches_device_call() -> LuxaforResult<()> {
    let (mut device, probe) = open_device();
    device.set_color(LedTarget::AllFrontSide, SAMPLE, 64).await?;
    device.front_side().set_color(SAMPLE, 64).await?;
    drop(device);

    assert_eq!(
        probe.get_write_history(),
        hex_reports("00:02:41:C8:14:2A:40:00:00", 2)
    );
    Ok(())
}

#[tokio::test]
async fn set_color_through_back_side_port_matches_device_call() -> LuxaforResult<()> {
    let (mut device, probe) = open_device();
    device.set_color(LedTarget::AllBackSide, SAMPLE, 64).await?;
    device.back_side().set_color(SAMPLE, 64).await?;
    drop(device);

    assert_eq!(
        probe.get_write_history(),
        hex_reports("00:02:42:C8:14:2A:40:00:00", 2)
    );
    Ok(())
}

#[tokio::test]
async fn set_color_through_single_led_port_matches_device_call() -> LuxaforResult<()> {
    let (mut device, probe) = open_device();
    device.set_color(LedTarget::of_index(4)?, SAMPLE, 64).await?;
    device.led(4)?.set_color(SAMPLE, 64).await?;
    drop(device);

    assert_eq!(
        probe.get_write_history(),
        hex_reports("00:02:04:C8:14:2A:40:00:00", 2)
    );
    Ok(())
}

#[tokio::test]
async fn blink_without_repeat_leaves_last_byte_empty() -> LuxaforResult<()> {
    let (mut device, probe) = open_device();
    device.blink(LedTarget::AllFrontSide, BLINK, 64, 0).await?;
    drop(device);

    assert_report!(probe.get_write_history(), ["00:03:41:D0:20:20:40:00:00"]);
    Ok(())
}

#[tokio::test]
async fn blink_with_repeat_sets_last_byte() -> LuxaforResult<()> {
    let (mut device, probe) = open_device();
    device.blink(LedTarget::AllFrontSide, BLINK, 64, 3).await?;
    drop(device);

    assert_report!(probe.get_write_history(), ["00:03:41:D0:20:20:40:00:03"]);
    Ok(())
}

#[tokio::test]
async fn blink_through_port_matches_device_call() -> LuxaforResult<()> {
    let (mut device, probe) = open_device();
    device.blink(LedTarget::of_index(2)?, BLINK, 10, 7).await?;
    device.led(2)?.blink(BLINK, 10, 7).await?;
    drop(device);

    assert_eq!(
        probe.get_write_history(),
        hex_reports("00:03:02:D0:20:20:0A:00:07", 2)
    );
    Ok(())
}

#[tokio::test]
async fn wave() -> LuxaforResult<()> {
    let (mut device, probe) = open_device();
    device
        .wave(WaveType::OverlappingShort, Color::new(0xCC, 0xCC, 0x20), 5, 2)
        .await?;
    drop(device);

    assert_report!(probe.get_write_history(), ["00:04:03:CC:CC:20:00:02:05"]);
    Ok(())
}

#[tokio::test]
async fn carry_out_pattern() -> LuxaforResult<()> {
    let (mut device, probe) = open_device();
    device.carry_out_pattern(PatternType::RainbowWave, 3).await?;
    drop(device);

    assert_report!(probe.get_write_history(), ["00:06:08:03:00:00:00:00:00"]);
    Ok(())
}

#[tokio::test]
async fn close_follows_the_last_write() -> LuxaforResult<()> {
    let (mut device, probe) = open_device();
    device.set_color(LedTarget::AllLeds, Color::GREEN, 0).await?;
    device.carry_out_pattern(PatternType::Police, 1).await?;
    drop(device);

    let journal = probe.journal();
    assert_eq!(journal.len(), 3);
    assert_eq!(journal.last(), Some(&TransportEvent::Close));
    assert_eq!(probe.close_count(), 1);
    Ok(())
}

#[test]
fn led_port_rejects_index_above_eight() {
    let (mut device, probe) = open_device();
    assert!(matches!(
        device.led(9),
        Err(luxafor::LuxaforError::Validation(_))
    ));
    assert_eq!(device.port(LedTarget::AllBackSide).target(), LedTarget::AllBackSide);
    drop(device);
    assert!(probe.get_write_history().is_empty());
}
