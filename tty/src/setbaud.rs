//
// Copyright (c) 2024 Jeff Garzik
//
// This file is part of the serialutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use std::fs::File;
use std::io::{self, Error};
use std::os::unix::io::AsRawFd;
use std::process::exit;

use clap::Parser;
use gettextrs::{bind_textdomain_codeset, gettext, setlocale, textdomain, LocaleCategory};
use slib::termios2::{tcgets2, tcsets2};
use slib::PROJECT_NAME;

#[derive(Parser)]
#[command(
    version,
    about = gettext("setbaud - program a custom baud rate on a serial device")
)]
struct Args {
    #[arg(help = gettext("Device to configure, followed by the requested line rate"))]
    operands: Vec<String>,
}

/// Parse a rate operand the way atoi does: skip leading whitespace, honor
/// an optional sign, consume digits until the first non-digit.  No digits
/// yields zero; values beyond the int range saturate.
fn parse_rate(s: &str) -> libc::c_int {
    let mut digits = s.trim_start().chars().peekable();

    let mut neg = false;
    if let Some(&c) = digits.peek() {
        if c == '+' || c == '-' {
            neg = c == '-';
            digits.next();
        }
    }

    let mut val: i64 = 0;
    for c in digits {
        let d = match c.to_digit(10) {
            Some(d) => d as i64,
            None => break,
        };

        val = val * 10 + d;
        if val > libc::c_int::MAX as i64 + 1 {
            break;
        }
    }
    if neg {
        val = -val;
    }

    val.clamp(libc::c_int::MIN as i64, libc::c_int::MAX as i64) as libc::c_int
}

/// Rate operands arrive premultiplied by 16, the usual UART input-clock
/// convention; the driver wants the real line rate.
fn scale_rate(rate: libc::c_int) -> libc::speed_t {
    (rate / 16) as libc::speed_t
}

/// Deselect the fixed baud table and route the driver to the explicit
/// speed fields.  Every other flag stays as read from the device.
fn set_ti_custom_speed(tio: &mut libc::termios2, speed: libc::speed_t) {
    tio.c_cflag &= !libc::CBAUD;
    tio.c_cflag |= libc::BOTHER;
    tio.c_ispeed = speed;
    tio.c_ospeed = speed;
}

fn set_custom_baud(device: &str, rate: libc::c_int) -> io::Result<()> {
    let speed = scale_rate(rate);

    let file = File::open(device).map_err(|e| {
        Error::other(format!(
            "{}: {}: {}",
            gettext("failed to open device"),
            device,
            e
        ))
    })?;

    let mut tio = tcgets2(file.as_raw_fd())
        .map_err(|e| Error::other(format!("{}: {}", gettext("ioctl TCGETS2 failed"), e)))?;

    set_ti_custom_speed(&mut tio, speed);

    tcsets2(file.as_raw_fd(), &tio)
        .map_err(|e| Error::other(format!("{}: {}", gettext("ioctl TCSETS2 failed"), e)))?;

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    setlocale(LocaleCategory::LcAll, "");
    textdomain(PROJECT_NAME)?;
    bind_textdomain_codeset(PROJECT_NAME, "UTF-8")?;

    let args = Args::parse();

    if args.operands.len() != 2 {
        // historical interface: the usage diagnostic goes to stdout
        println!("{}", gettext("ERROR: Incorrect invocation"));
        exit(1);
    }

    let device = &args.operands[0];
    let rate = parse_rate(&args.operands[1]);

    if let Err(e) = set_custom_baud(device, rate) {
        eprintln!("{}", e);
        exit(1);
    }

    Ok(())
}
