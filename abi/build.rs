use std::{env, process::Command};

// src/pb/reservation.rs is checked in; set RSVP_GEN_PB=1 to regenerate it.
fn main() {
    println!("cargo:rerun-if-changed=protos/reservation.proto");
    println!("cargo:rerun-if-env-changed=RSVP_GEN_PB");
    if env::var_os("RSVP_GEN_PB").is_none() {
        return;
    }

    tonic_build::configure()
        .out_dir("src/pb")
        .compile(&["protos/reservation.proto"], &["protos"])
        .unwrap();
    Command::new("cargo").args(["fmt"]).output().unwrap();
}
