//! Command handling and installer progression for the server console.

use super::state::{
    InstallPhase, LineKind, TermState, DONE_LINGER_TICKS, INSTALL_STEP_TICKS,
};

/// Files on the server's rescue disk: `(name, contents)`.
const FILES: &[(&str, &str)] = &[
    (
        "README.txt",
        "This server ran the library catalogue for 12 years. \
         Run ./install.sh to give it a second life with NIRD Linux.",
    ),
    (
        "install.sh",
        "#!/bin/sh\n# NIRD Linux unattended installer. No questions asked.",
    ),
    ("nird-linux.iso", "(binary file, 4.2G. Not much to read.)"),
];

/// Installer output, revealed one line per [`INSTALL_STEP_TICKS`].
const INSTALL_SCRIPT: &[&str] = &[
    "Probing disks... found /dev/sda (250G, squeaky but willing).",
    "Sweeping the dust (and the old OS) off /dev/sda...",
    "Copying NIRD Linux image  [####################] 100%",
    "Installing bootloader to /dev/sda...",
    "First boot checks passed. The fans sound relieved.",
    "Installation complete. This machine lives again.",
];

pub fn run_command(state: &mut TermState, raw: &str) {
    let cmd = raw.trim();
    if cmd.is_empty() {
        return;
    }
    state.push(LineKind::Command, format!("$ {cmd}"));

    let mut parts = cmd.split_whitespace();
    let head = parts.next().unwrap_or("");
    match head {
        "help" => {
            state.push(LineKind::Output, "help          this list");
            state.push(LineKind::Output, "ls            what's on the disk");
            state.push(LineKind::Output, "cat FILE      read a file");
            state.push(LineKind::Output, "./install.sh  run the NIRD installer");
        }
        "ls" => {
            let names: Vec<&str> = FILES.iter().map(|(name, _)| *name).collect();
            state.push(LineKind::Output, names.join("  "));
        }
        "cat" => match parts.next() {
            Some(name) => match FILES.iter().find(|(n, _)| *n == name) {
                Some((_, contents)) => {
                    for line in contents.lines() {
                        state.push(LineKind::Output, line.trim_start());
                    }
                }
                None => {
                    state.push(LineKind::Error, format!("cat: {name}: No such file"));
                }
            },
            None => {
                state.push(LineKind::Error, "cat: which file?");
            }
        },
        "./install.sh" => start_install(state),
        "sh" => match parts.next() {
            Some("install.sh") | Some("./install.sh") => start_install(state),
            Some(other) => {
                state.push(LineKind::Error, format!("sh: {other}: No such file"));
            }
            None => {
                state.push(LineKind::Error, "sh: need a script to run");
            }
        },
        "install.sh" => {
            state.push(
                LineKind::Error,
                "sh: install.sh: Permission denied (try ./install.sh)",
            );
        }
        other => {
            state.push(LineKind::Error, format!("sh: {other}: command not found"));
        }
    }
}

fn start_install(state: &mut TermState) {
    if state.install != InstallPhase::NotStarted {
        state.push(LineKind::Error, "install.sh: installer already ran");
        return;
    }
    state.install = InstallPhase::Running { step: 0, timer: 0 };
}

pub fn tick(state: &mut TermState, delta_ticks: u32) {
    for _ in 0..delta_ticks {
        step_tick(state);
    }
}

fn step_tick(state: &mut TermState) {
    match state.install {
        InstallPhase::Running { step, timer } => {
            if timer + 1 >= INSTALL_STEP_TICKS {
                let last = step + 1 == INSTALL_SCRIPT.len();
                let kind = if last { LineKind::Success } else { LineKind::Output };
                state.push(kind, INSTALL_SCRIPT[step]);
                state.install = if last {
                    InstallPhase::Lingering { timer: 0 }
                } else {
                    InstallPhase::Running {
                        step: step + 1,
                        timer: 0,
                    }
                };
            } else {
                state.install = InstallPhase::Running {
                    step,
                    timer: timer + 1,
                };
            }
        }
        InstallPhase::Lingering { timer } => {
            state.install = if timer + 1 >= DONE_LINGER_TICKS {
                InstallPhase::Done
            } else {
                InstallPhase::Lingering { timer: timer + 1 }
            };
        }
        InstallPhase::NotStarted | InstallPhase::Done => {}
    }
}
