//
// Copyright (c) 2024 Jeff Garzik
//
// This file is part of the serialutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Access to the Linux extended terminal settings (`struct termios2`).
//!
//! The portable `tcgetattr`/`tcsetattr` interface can only express the
//! enumerated `B*` rates.  The `TCGETS2`/`TCSETS2` request pair carries
//! explicit input and output speed fields alongside the usual flags, which
//! is the only way to program a line rate the fixed table does not list.

use std::io;
use std::mem::MaybeUninit;
use std::os::unix::io::RawFd;

/// Read the extended terminal settings of `fd`.
pub fn tcgets2(fd: RawFd) -> io::Result<libc::termios2> {
    let mut tio: MaybeUninit<libc::termios2> = MaybeUninit::zeroed();
    let ret = unsafe { libc::ioctl(fd, libc::TCGETS2, tio.as_mut_ptr()) };
    if ret < 0 {
        return Err(io::Error::last_os_error());
    }

    Ok(unsafe { tio.assume_init() })
}

/// Write the extended terminal settings of `fd`, taking effect immediately
/// rather than after queued output drains.
pub fn tcsets2(fd: RawFd, tio: &libc::termios2) -> io::Result<()> {
    let ret = unsafe { libc::ioctl(fd, libc::TCSETS2, tio as *const libc::termios2) };
    if ret < 0 {
        return Err(io::Error::last_os_error());
    }

    Ok(())
}
