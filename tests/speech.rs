use std::thread;
use std::time::{Duration, Instant};

use vocabquiz::speech::{CommandSpeaker, NullSpeaker, Speaker};

/// Children of this process that have exited but were never waited on.
#[cfg(target_os = "linux")]
fn zombie_children() -> usize {
    let me = std::process::id().to_string();
    let Ok(entries) = std::fs::read_dir("/proc") else {
        return 0;
    };
    entries
        .filter_map(|e| e.ok())
        .filter_map(|e| std::fs::read_to_string(e.path().join("stat")).ok())
        .filter(|stat| {
            // "pid (comm) state ppid ..."; comm may contain spaces
            let Some(rest) = stat.rfind(')').map(|i| &stat[i + 1..]) else {
                return false;
            };
            let mut fields = rest.split_whitespace();
            let state = fields.next();
            let ppid = fields.next();
            state == Some("Z") && ppid == Some(me.as_str())
        })
        .count()
}

#[cfg(target_os = "linux")]
#[test]
fn test_spoken_commands_are_reaped() {
    let speaker = CommandSpeaker::from_command_line("true").unwrap();
    for _ in 0..5 {
        speaker.speak("hello").unwrap();
    }

    let deadline = Instant::now() + Duration::from_secs(5);
    let mut zombies = zombie_children();
    while zombies > 0 && Instant::now() < deadline {
        thread::sleep(Duration::from_millis(50));
        zombies = zombie_children();
    }
    assert_eq!(zombies, 0);
}

#[test]
fn test_command_line_parsing() {
    let speaker = CommandSpeaker::from_command_line("espeak -v en-us").unwrap();
    assert_eq!(speaker.program(), "espeak");
    assert!(CommandSpeaker::from_command_line("   ").is_none());
}

#[test]
fn test_missing_program_is_an_error() {
    let speaker = CommandSpeaker::from_command_line("vocabquiz-no-such-speaker").unwrap();
    assert!(speaker.speak("hello").is_err());
    assert!(NullSpeaker.speak("hello").is_ok());
}
