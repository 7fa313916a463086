use crate::commands::CmdResult;
use crate::platforms;

pub fn run() -> CmdResult {
    CmdResult::default().with_profiles(platforms::all().iter().collect())
}
