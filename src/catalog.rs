//! Built-in content tables: subject question banks, the career-path catalog,
//! FAQ entries, the mock-interview pool, and report/dashboard copy.
//!
//! Everything here is read-only display/content data. The built-in subject
//! banks guarantee the assessment works even without a content config file.

use crate::domain::{CareerDetail, CareerPath, FaqEntry, Question, RoadmapPeriod, SubjectBank};

fn q(text: &str, options: [&str; 4], correct: usize) -> Question {
  Question {
    text: text.into(),
    options: options.iter().map(|s| s.to_string()).collect(),
    correct,
  }
}

/// The three built-in assessable subjects, five questions each.
pub fn subject_banks() -> Vec<SubjectBank> {
  vec![
    SubjectBank {
      subject: "React".into(),
      questions: vec![
        q(
          "What is the correct way to create a React component?",
          [
            "function MyComponent() { return <div>Hello</div>; }",
            "const MyComponent = () => <div>Hello</div>;",
            "class MyComponent extends React.Component { render() { return <div>Hello</div>; } }",
            "All of the above",
          ],
          3,
        ),
        q(
          "What is the purpose of useEffect hook?",
          [
            "To manage component state",
            "To perform side effects in functional components",
            "To create context",
            "To handle events",
          ],
          1,
        ),
        q(
          "How do you pass data from parent to child component?",
          ["Using state", "Using props", "Using context", "Using refs"],
          1,
        ),
        q(
          "What is JSX?",
          [
            "A JavaScript library",
            "A syntax extension for JavaScript",
            "A CSS framework",
            "A database query language",
          ],
          1,
        ),
        q(
          "Which hook is used to manage component state?",
          ["useEffect", "useState", "useContext", "useReducer"],
          1,
        ),
      ],
    },
    SubjectBank {
      subject: "Python".into(),
      questions: vec![
        q(
          "Which of the following is the correct way to define a function in Python?",
          ["function myFunc():", "def myFunc():", "define myFunc():", "func myFunc():"],
          1,
        ),
        q(
          "What does 'len()' function do in Python?",
          [
            "Returns the length of an object",
            "Creates a new list",
            "Sorts a list",
            "Converts to string",
          ],
          0,
        ),
        q(
          "Which data type is mutable in Python?",
          ["String", "Tuple", "List", "Integer"],
          2,
        ),
        q(
          "What is the correct way to create a dictionary in Python?",
          ["dict = []", "dict = {}", "dict = ()", "dict = ''"],
          1,
        ),
        q(
          "Which operator is used for floor division in Python?",
          ["/", "//", "%", "**"],
          1,
        ),
      ],
    },
    SubjectBank {
      subject: "JavaScript".into(),
      questions: vec![
        q(
          "What is the correct way to declare a variable in ES6?",
          ["var x = 5;", "let x = 5;", "const x = 5;", "Both let and const"],
          3,
        ),
        q(
          "Which method is used to add elements to the end of an array?",
          ["push()", "pop()", "shift()", "unshift()"],
          0,
        ),
        q(
          "What does '===' operator do in JavaScript?",
          [
            "Compares values only",
            "Compares both value and type",
            "Assigns a value",
            "Creates a variable",
          ],
          1,
        ),
        q(
          "How do you create a function in JavaScript?",
          [
            "function myFunction() {}",
            "const myFunction = () => {}",
            "const myFunction = function() {}",
            "All of the above",
          ],
          3,
        ),
        q(
          "What is a closure in JavaScript?",
          [
            "A way to close a program",
            "A function with access to outer scope variables",
            "A type of loop",
            "A conditional statement",
          ],
          1,
        ),
      ],
    },
  ]
}

fn roadmap(periods: &[(&str, &[&str])]) -> Vec<RoadmapPeriod> {
  periods
    .iter()
    .map(|(period, tasks)| RoadmapPeriod {
      period: period.to_string(),
      tasks: tasks.iter().map(|t| t.to_string()).collect(),
    })
    .collect()
}

fn strings(items: &[&str]) -> Vec<String> {
  items.iter().map(|s| s.to_string()).collect()
}

/// The career-path catalog backing the dashboard cards and the detail page.
pub fn career_paths() -> Vec<CareerPath> {
  vec![
    CareerPath {
      id: 1,
      title: "Full Stack Developer".into(),
      description: "Build end-to-end web applications with modern technologies".into(),
      salary_range: "$70k - $120k".into(),
      demand: "High".into(),
      growth: "+22%".into(),
      skills: strings(&["React", "Node.js", "Python", "AWS", "MongoDB", "TypeScript"]),
      detail: CareerDetail {
        roadmap: roadmap(&[
          (
            "0-3 months",
            &[
              "Master HTML, CSS, and JavaScript fundamentals",
              "Learn React and component-based architecture",
              "Understand state management with Redux/Context",
              "Build your first full-stack application",
            ],
          ),
          (
            "3-6 months",
            &[
              "Master Node.js and Express.js",
              "Learn database design and SQL/NoSQL",
              "Implement authentication and authorization",
              "Deploy applications to cloud platforms",
            ],
          ),
          (
            "6-12 months",
            &[
              "Learn advanced React patterns and optimization",
              "Master API design and microservices",
              "Implement testing strategies (unit, integration, e2e)",
              "Contribute to open-source projects",
            ],
          ),
          (
            "12+ months",
            &[
              "Lead development projects and mentor juniors",
              "Architecture design and system scalability",
              "DevOps practices and CI/CD pipelines",
              "Stay updated with emerging technologies",
            ],
          ),
        ]),
        companies: strings(&["Google", "Facebook", "Netflix", "Airbnb", "Uber"]),
        locations: strings(&["San Francisco", "New York", "Seattle", "Austin", "Remote"]),
      },
    },
    CareerPath {
      id: 2,
      title: "Data Scientist".into(),
      description: "Analyze complex data to drive business decisions".into(),
      salary_range: "$85k - $150k".into(),
      demand: "Very High".into(),
      growth: "+31%".into(),
      skills: strings(&["Python", "Machine Learning", "SQL", "Statistics"]),
      detail: CareerDetail {
        roadmap: roadmap(&[
          (
            "0-3 months",
            &[
              "Learn Python for data analysis (pandas, NumPy)",
              "Refresh statistics and probability foundations",
              "Practice SQL on real datasets",
              "Build exploratory analysis notebooks",
            ],
          ),
          (
            "3-6 months",
            &[
              "Study core machine learning algorithms",
              "Learn data visualization and storytelling",
              "Complete an end-to-end prediction project",
              "Understand experiment design and A/B testing",
            ],
          ),
          (
            "6-12 months",
            &[
              "Work with large-scale data tooling",
              "Learn model deployment and monitoring",
              "Deepen one domain (NLP, vision, or forecasting)",
              "Publish projects and write up findings",
            ],
          ),
          (
            "12+ months",
            &[
              "Own modeling decisions for a product area",
              "Mentor analysts and review experiments",
              "Keep up with research and new tooling",
            ],
          ),
        ]),
        companies: strings(&["Amazon", "Spotify", "LinkedIn", "Stripe", "Databricks"]),
        locations: strings(&["San Francisco", "Boston", "London", "Remote"]),
      },
    },
    CareerPath {
      id: 3,
      title: "UX Designer".into(),
      description: "Create intuitive and beautiful user experiences".into(),
      salary_range: "$60k - $110k".into(),
      demand: "High".into(),
      growth: "+13%".into(),
      skills: strings(&["Figma", "User Research", "Prototyping", "Design Systems"]),
      detail: CareerDetail {
        roadmap: roadmap(&[
          (
            "0-3 months",
            &[
              "Learn design fundamentals (layout, typography, color)",
              "Get fluent in Figma",
              "Study usability heuristics",
              "Redesign an existing product flow as practice",
            ],
          ),
          (
            "3-6 months",
            &[
              "Run your first user interviews and tests",
              "Build interactive prototypes",
              "Learn accessibility basics",
              "Start a portfolio with case studies",
            ],
          ),
          (
            "6-12 months",
            &[
              "Contribute to a design system",
              "Practice workshop facilitation",
              "Partner closely with engineers on handoff",
            ],
          ),
          (
            "12+ months",
            &[
              "Lead end-to-end product design work",
              "Mentor junior designers",
              "Drive research strategy for your team",
            ],
          ),
        ]),
        companies: strings(&["Apple", "Figma", "Shopify", "IBM", "Canva"]),
        locations: strings(&["New York", "Toronto", "Berlin", "Remote"]),
      },
    },
  ]
}

pub fn faq_entries() -> Vec<FaqEntry> {
  let entries = [
    (
      "How does the AI career advisor work?",
      "Our AI analyzes your skills, interests, and career goals to provide personalized recommendations and learning paths.",
    ),
    (
      "Is my data secure?",
      "Yes, we use industry-standard encryption to protect your personal information and career data.",
    ),
    (
      "Can I update my profile information?",
      "Absolutely! You can update your skills, interests, and career goals anytime from your profile page.",
    ),
    (
      "How often are career recommendations updated?",
      "Our AI updates recommendations based on market trends and your profile changes in real-time.",
    ),
  ];
  entries
    .iter()
    .map(|(question, answer)| FaqEntry { question: question.to_string(), answer: answer.to_string() })
    .collect()
}

/// Pool the mock-interview flow samples five questions from.
pub fn interview_questions() -> Vec<String> {
  strings(&[
    "Tell me about yourself and your technical background.",
    "What programming languages are you most comfortable with?",
    "Describe a challenging project you've worked on recently.",
    "How do you stay updated with the latest technologies?",
    "Explain the difference between REST and GraphQL APIs.",
    "What is your approach to debugging complex issues?",
    "How do you handle version control in team projects?",
    "Describe your experience with cloud platforms.",
    "What testing strategies do you implement in your projects?",
    "How would you optimize the performance of a web application?",
  ])
}

/// Section headings included in the generated career report.
pub fn report_sections() -> Vec<(String, String)> {
  [
    ("Career Overview", "Your professional profile and career objectives"),
    ("Skills Analysis", "Detailed breakdown of your current skill levels"),
    ("Learning Path", "Personalized roadmap for skill development"),
    ("Market Insights", "Industry trends and salary benchmarks for your targets"),
  ]
  .iter()
  .map(|(t, d)| (t.to_string(), d.to_string()))
  .collect()
}
