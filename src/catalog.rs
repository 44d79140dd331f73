//! Built-in catalog content: seed courses and the resource directory.
//!
//! A small hand-curated set spanning every lane so the app is useful even
//! without an external course bank. Ids are author-assigned and must stay
//! stable across revisions; external bookmarks reference them.

use crate::domain::{Course, CourseExercise, CourseLane, ExpectedTerms, Resource};

fn ex(
  id: &str,
  title: &str,
  instruction: &str,
  placeholder: Option<&str>,
  expected: Option<ExpectedTerms>,
  check_for: Option<Vec<&str>>,
  success: &str,
  failure: &str,
) -> CourseExercise {
  CourseExercise {
    id: id.into(),
    title: title.into(),
    instruction: instruction.into(),
    details: vec![],
    placeholder: placeholder.map(str::to_string),
    expected,
    check_for: check_for.map(|v| v.into_iter().map(str::to_string).collect()),
    success: success.into(),
    failure: failure.into(),
  }
}

fn all(terms: &[&str]) -> Option<ExpectedTerms> {
  Some(ExpectedTerms {
    all: Some(terms.iter().map(|t| t.to_string()).collect()),
    any: None,
  })
}

fn any(terms: &[&str]) -> Option<ExpectedTerms> {
  Some(ExpectedTerms {
    all: None,
    any: Some(terms.iter().map(|t| t.to_string()).collect()),
  })
}

/// Built-in courses, grouped here by lane for readability. Insertion order
/// within a lane only breaks ties; display order comes from `number`.
pub fn seed_courses() -> Vec<Course> {
  vec![
    // --- foundation ---
    Course {
      id: "git-github".into(),
      lane: CourseLane::Foundation,
      title: "Git & GitHub Fundamentals".into(),
      number: Some(1),
      overview: "Track changes, publish work, and collaborate with version control."
        .into(),
      outcomes: vec![
        "Inspect and stage changes from the command line".into(),
        "Write useful commit messages".into(),
        "Push a local branch to GitHub".into(),
      ],
      exercises: vec![
        ex(
          "check-status",
          "Check the working tree",
          "You edited two files. Which command shows what changed?",
          Some("Type the command here. Example: git status"),
          all(&["git status"]),
          Some(vec!["uses git status"]),
          "Right: git status is the first thing to reach for.",
          "Not quite. Ask git what it thinks changed.",
        ),
        ex(
          "stage-commit",
          "Stage and commit",
          "Stage README.md and commit it with a message.",
          Some("Type the commands here. Example: git add README.md"),
          all(&["git add", "git commit"]),
          Some(vec!["stages with git add", "commits with git commit -m"]),
          "That is the full stage-then-commit loop.",
          "You need both a staging step and a commit step.",
        ),
        ex(
          "describe-staging",
          "Explain the staging area",
          "In your own words: what sits between your edits and a commit?",
          Some("Write your answer"),
          any(&["staging area", "index"]),
          Some(vec!["mentions staging area"]),
          "Exactly. The staging area (the index) holds the next commit.",
          "Think about where `git add` puts things.",
        ),
      ],
    },
    Course {
      id: "terminal-basics".into(),
      lane: CourseLane::Foundation,
      title: "Command Line Basics".into(),
      number: Some(2),
      overview: "Move around the shell with confidence.".into(),
      outcomes: vec![
        "Navigate directories".into(),
        "Inspect files without leaving the terminal".into(),
      ],
      exercises: vec![ex(
        "list-files",
        "List everything",
        "Show all files in the current directory, including hidden ones.",
        Some("Type the command here. Example: ls -la"),
        all(&["ls"]),
        Some(vec!["uses ls", "includes hidden files"]),
        "That listing shows dotfiles too.",
        "There is a single command for this; flags control the rest.",
      )],
    },
    // --- frontend ---
    Course {
      id: "html-css".into(),
      lane: CourseLane::Frontend,
      title: "HTML & CSS Foundations".into(),
      number: Some(1),
      overview: "Structure pages semantically and lay them out with modern CSS.".into(),
      outcomes: vec![
        "Choose semantic elements".into(),
        "Center and align content with flexbox or grid".into(),
      ],
      exercises: vec![ex(
        "center-div",
        "Center a box",
        "Name a CSS layout technique you would use to center a card both ways.",
        Some("Add your answer"),
        any(&["flexbox", "flex", "grid"]),
        Some(vec!["names a layout technique"]),
        "Yes: flexbox or grid both handle two-axis centering cleanly.",
        "Margins alone will not do it. Which layout modules can?",
      )],
    },
    // --- backend ---
    Course {
      id: "http-apis".into(),
      lane: CourseLane::Backend,
      title: "HTTP & REST APIs".into(),
      number: Some(1),
      overview: "Speak HTTP: methods, paths, status codes, and resources.".into(),
      outcomes: vec![
        "Match methods to intents".into(),
        "Design predictable resource paths".into(),
      ],
      exercises: vec![ex(
        "fetch-users",
        "Fetch a collection",
        "Write the request line that lists all users of an API rooted at /api.",
        Some("Type the request line here. Example: GET /api/users"),
        all(&["GET", "/api/users"]),
        Some(vec!["uses the GET method", "targets /api/users"]),
        "Correct: a safe, idempotent read of the collection.",
        "Reads use one particular method; the path names the collection.",
      )],
    },
    // --- ai-data-science ---
    Course {
      id: "python-pandas".into(),
      lane: CourseLane::AiDataScience,
      title: "Data Analysis with pandas".into(),
      number: Some(1),
      overview: "Load, clean, and summarize tabular data in Python.".into(),
      outcomes: vec![
        "Read CSV data into a DataFrame".into(),
        "Filter and aggregate rows".into(),
      ],
      exercises: vec![ex(
        "load-csv",
        "Load a CSV",
        "Load sales.csv into a DataFrame named df.",
        Some("Type the code here. Example: df = pd.read_csv(\"sales.csv\")"),
        all(&["read_csv"]),
        Some(vec!["calls read_csv"]),
        "That call gives you a DataFrame ready to explore.",
        "pandas has one well-known reader for CSV files.",
      )],
    },
    // --- career ---
    Course {
      id: "resume-portfolio".into(),
      lane: CourseLane::Career,
      title: "Resume & Portfolio".into(),
      number: Some(1),
      overview: "Present your work so a reviewer sees the evidence fast.".into(),
      outcomes: vec![
        "Lead with shipped projects".into(),
        "Link evidence instead of listing buzzwords".into(),
      ],
      exercises: vec![ex(
        "evidence-first",
        "Show the evidence",
        "What belongs near the top of a junior developer resume?",
        Some("Write your answer here"),
        any(&["project", "portfolio", "github"]),
        Some(vec!["points at concrete work"]),
        "Concrete, linkable work beats any skills list.",
        "Reviewers look for proof. What can they click on?",
      )],
    },
    // --- career-devops ---
    Course {
      id: "ci-cd-intro".into(),
      lane: CourseLane::CareerDevops,
      title: "CI/CD Pipelines".into(),
      number: Some(1),
      overview: "Automate the path from commit to running software.".into(),
      outcomes: vec![
        "Name the standard pipeline stages".into(),
        "Explain what each stage gates".into(),
      ],
      exercises: vec![ex(
        "pipeline-stages",
        "Name the stages",
        "List the three classic pipeline stages, in order.",
        Some("Type your answer here. Example: build, test, deploy"),
        all(&["build", "test", "deploy"]),
        Some(vec!["names build", "names test", "names deploy"]),
        "That is the classic gate sequence.",
        "Three stages: compile it, prove it, ship it.",
      )],
    },
  ]
}

/// Read-only directory of external learning resources.
pub fn seed_resources() -> Vec<Resource> {
  vec![
    Resource {
      id: "pro-git".into(),
      lane: CourseLane::Foundation,
      title: "Pro Git (free book)".into(),
      url: "https://git-scm.com/book/en/v2".into(),
      blurb: "The canonical Git reference, readable cover to cover.".into(),
    },
    Resource {
      id: "mdn-css-layout".into(),
      lane: CourseLane::Frontend,
      title: "MDN: CSS layout".into(),
      url: "https://developer.mozilla.org/en-US/docs/Learn/CSS/CSS_layout".into(),
      blurb: "Flexbox, grid, and friends with live examples.".into(),
    },
    Resource {
      id: "http-semantics".into(),
      lane: CourseLane::Backend,
      title: "RFC 9110: HTTP Semantics".into(),
      url: "https://www.rfc-editor.org/rfc/rfc9110".into(),
      blurb: "What methods and status codes actually mean.".into(),
    },
    Resource {
      id: "pandas-10min".into(),
      lane: CourseLane::AiDataScience,
      title: "10 minutes to pandas".into(),
      url: "https://pandas.pydata.org/docs/user_guide/10min.html".into(),
      blurb: "The official quick tour of DataFrame basics.".into(),
    },
    Resource {
      id: "gh-actions-docs".into(),
      lane: CourseLane::CareerDevops,
      title: "GitHub Actions documentation".into(),
      url: "https://docs.github.com/actions".into(),
      blurb: "Build a first pipeline in an afternoon.".into(),
    },
  ]
}
