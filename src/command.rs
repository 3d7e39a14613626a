#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Command {
  Back,
  HideHelp,
  HideStats,
  Home,
  None,
  OpenLink,
  OpenThread,
  Quit,
  Refresh,
  ShowHelp,
  ShowStats,
}
