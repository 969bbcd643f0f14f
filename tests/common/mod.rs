use assert_cmd::Command;

pub fn peter_cmd() -> Command {
    Command::cargo_bin("peter").unwrap()
}

pub const STORE_WITH_STATUS: &str = "# Daily Todos\n\n\
## 2026-01-02\n\n\
- **Question**: What now?\n  \
- **Answer**: write tests\n  \
- **Priority**: 2\n  \
- **Completed**: false\n\n\
- **Question**: Anything else?\n  \
- **Answer**: nothing\n  \
- **Priority**: 3\n  \
- **Completed**: false\n\n\
- **Question**: Done yet?\n  \
- **Answer**: shipped\n  \
- **Priority**: 1\n  \
- **Completed**: true\n";
