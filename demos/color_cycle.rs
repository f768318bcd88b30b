//! Boot demo for a LaunchPad with an ILI9341 module on eUSCI B0.
//!
//! Cycles the panel through white/red/green/blue full-screen clears with
//! one second pauses, flipping orientation as it goes, then leaves a
//! greeting on screen.
//!
//! Wiring: SCLK P1.1, MOSI P1.2, MISO P1.3, CS P1.0, DC P2.6, RST P2.3,
//! backlight P2.7.

#![no_main]
#![no_std]

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::MODE_0;
use msp430_ili9341::{
    clock::{ClockConfig, MclkDiv, SmclkDiv},
    delay::Delay,
    gpio::GpioExt,
    pmm::Pmm,
    spi::SpiConfig,
    watchdog::Wdt,
    Ili9341, Orientation, Rgb, SpiInterface,
};
use msp430_rt::entry;
use panic_msp430 as _;

#[entry]
fn main() -> ! {
    let periph = msp430_ili9341::pac::Peripherals::take().unwrap();

    let _wdt = Wdt::constrain(periph.WDT_A);
    let (mclk, smclk, _aclk) = ClockConfig::new(periph.CS)
        .mclk_dcoclk(732, MclkDiv::_1) // ~24 MHz
        .smclk_div(SmclkDiv::_1)
        .aclk_vloclk()
        .freeze();
    let mut delay = Delay::new(&mclk);

    let pmm = Pmm::new(periph.PMM);
    let p1 = periph.P1.split(&pmm);
    let p2 = periph.P2.split(&pmm);

    let sclk = p1.pin1.to_alternate1();
    let mosi = p1.pin2.to_alternate1();
    let miso = p1.pin3.to_alternate1();
    let mut cs = p1.pin0.to_output();
    let dc = p2.pin6.to_output();
    let mut rst = p2.pin3.to_output();
    let mut backlight = p2.pin7.to_output();

    // Both gates idle high, backlight hard on.
    cs.set_high().ok();
    rst.set_high().ok();
    backlight.set_high().ok();

    let spi = SpiConfig::new(periph.E_USCI_B0, MODE_0, true)
        .use_smclk(&smclk, 1)
        .pins(mosi, miso, sclk);

    let mut lcd = Ili9341::new(SpiInterface::new(spi, dc, cs, rst));
    lcd.init(&mut delay).unwrap();

    let mut rounds = 10u8;
    while rounds > 0 {
        lcd.clear(Rgb::WHITE, Orientation::Landscape).unwrap();
        delay.delay_ms(1000);
        lcd.clear(Rgb::RED, Orientation::Portrait).unwrap();
        delay.delay_ms(1000);
        lcd.clear(Rgb::GREEN, Orientation::Landscape).unwrap();
        delay.delay_ms(1000);
        lcd.clear(Rgb::BLUE, Orientation::Portrait).unwrap();
        delay.delay_ms(1000);
        rounds -= 1;
    }

    lcd.clear(Rgb::BLACK, Orientation::Landscape).unwrap();
    lcd.draw_string(5, 5, b"DISPLAY UP", Rgb::WHITE).unwrap();

    loop {
        msp430::asm::nop();
    }
}

#[no_mangle]
extern "C" fn abort() -> ! {
    panic!();
}
