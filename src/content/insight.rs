// src/content/insight.rs
//! Narrative "insight" articles derived from the blockchain subset.
//! At most five articles; each category is emitted only when its
//! triggering subset is non-empty. Bodies are literal prose templates
//! keyed by category, not a text-generation engine.

use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;

use crate::content::spaced_name;
use crate::fetch::RepoRecord;

/// Repositories updated within this many days count as active.
pub const ACTIVE_WINDOW_DAYS: i64 = 90;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InsightCategory {
    Experience,
    Strategy,
    Technical,
    Security,
    Analysis,
}

impl InsightCategory {
    pub fn read_time(self) -> &'static str {
        match self {
            InsightCategory::Experience => "4 min read",
            InsightCategory::Strategy => "5 min read",
            InsightCategory::Technical => "6 min read",
            InsightCategory::Security => "5 min read",
            InsightCategory::Analysis => "7 min read",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            InsightCategory::Experience => "⚡",
            InsightCategory::Strategy => "🎯",
            InsightCategory::Technical => "💻",
            InsightCategory::Security => "🔒",
            InsightCategory::Analysis => "🌟",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightArticle {
    /// Monotonically assigned per generation pass, starting at 1.
    pub id: u32,
    pub title: String,
    pub category: InsightCategory,
    pub date: DateTime<Utc>,
    pub preview: String,
    pub full_content: String,
    pub tags: Vec<String>,
    pub read_time: &'static str,
    pub icon: &'static str,
    pub repo_count: usize,
}

fn experience_article(repos: &[&RepoRecord], now: DateTime<Utc>) -> Option<InsightArticle> {
    let active: Vec<&&RepoRecord> = repos
        .iter()
        .filter(|r| r.days_since_update(now) < ACTIVE_WINDOW_DAYS)
        .collect();
    let latest = active.iter().max_by_key(|r| r.updated_at)?;

    let n = active.len();
    let language = latest
        .language
        .as_deref()
        .unwrap_or("blockchain development");
    let description = latest
        .description
        .as_deref()
        .unwrap_or("blockchain experiment");

    Some(InsightArticle {
        id: 0,
        title: format!("What I've Learned Running {n} Active Blockchain Projects"),
        category: InsightCategory::Experience,
        date: latest.updated_at,
        preview: format!(
            "Hey there! So I've been juggling {n} different blockchain projects lately, \
             and man, it's been quite a ride. The biggest lesson? Always expect the unexpected..."
        ),
        full_content: format!(
            "Hey there! So I've been juggling {n} different blockchain projects lately, \
             and man, it's been quite a ride. The biggest lesson? Always expect the unexpected.\n\n\
             Running multiple validators simultaneously taught me that hardware isn't everything - \
             network reliability is KING. I learned this the hard way when my main validator went \
             offline during a crucial epoch because my ISP decided to have \"maintenance\" at 3 AM.\n\n\
             The most recent project I've been working on is {name}, and honestly, it's been \
             teaching me so much about {language}. What started as a simple {description} turned \
             into a deep dive into protocol-level optimizations.\n\n\
             Pro tip: If you're running validators, always have a backup internet connection. \
             Trust me on this one - I've lost count of how many times my mobile hotspot saved \
             my uptime stats!",
            name = latest.name,
        ),
        tags: active.iter().take(3).map(|r| r.name.clone()).collect(),
        read_time: InsightCategory::Experience.read_time(),
        icon: InsightCategory::Experience.icon(),
        repo_count: n,
    })
}

fn is_testnet(repo: &RepoRecord) -> bool {
    repo.name.to_lowercase().contains("test")
        || repo
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains("testnet"))
}

fn strategy_article(repos: &[&RepoRecord]) -> Option<InsightArticle> {
    let testnet: Vec<&&RepoRecord> = repos.iter().filter(|r| is_testnet(r)).collect();
    let first = testnet.first()?;

    let n = testnet.len();
    Some(InsightArticle {
        id: 0,
        title: format!("My Testnet Hunting Journey: {n} Networks and Counting"),
        category: InsightCategory::Strategy,
        date: first.created_at,
        preview: format!(
            "Alright, let's talk about testnet hunting. I've participated in {n} different \
             testnets so far, and each one taught me something new about this crazy space..."
        ),
        full_content: format!(
            "Alright, let's talk about testnet hunting. I've participated in {n} different \
             testnets so far, and each one taught me something new about this crazy space.\n\n\
             The golden rule I've discovered? Be early, but more importantly, be helpful. Don't \
             just run a node and ghost the community - actually engage! Report bugs, suggest \
             improvements, help other participants. The teams notice this stuff.\n\n\
             My biggest win was with {name} - got in early, provided consistent feedback, and \
             even helped debug some network issues. The relationships you build during testnets \
             often matter more than the immediate rewards.\n\n\
             Here's something most people don't tell you: track everything. I keep spreadsheets \
             of every testnet, requirements, deadlines, and performance metrics. It sounds nerdy, \
             but it's saved me from missing important updates countless times.\n\n\
             The hardest part isn't the technical stuff - it's staying organized when you're \
             participating in multiple testnets simultaneously. But hey, that's what makes it \
             fun, right?",
            name = first.name,
        ),
        tags: testnet
            .iter()
            .take(3)
            .map(|r| spaced_name(&r.name))
            .collect(),
        read_time: InsightCategory::Strategy.read_time(),
        icon: InsightCategory::Strategy.icon(),
        repo_count: n,
    })
}

fn technical_article(repos: &[&RepoRecord]) -> Option<InsightArticle> {
    let mut stack: Vec<&str> = Vec::new();
    for repo in repos {
        if let Some(lang) = repo.language.as_deref() {
            if !stack.contains(&lang) {
                stack.push(lang);
            }
        }
    }
    let lead = *stack.first()?;
    let latest = repos.iter().find(|r| r.language.is_some())?;

    let description = latest
        .description
        .as_deref()
        .unwrap_or("The implementation challenged my understanding of distributed systems");
    let patterns = latest.language.as_deref().unwrap_or("advanced");

    Some(InsightArticle {
        id: 0,
        title: format!("Why I'm Obsessed with {lead} for Blockchain Development"),
        category: InsightCategory::Technical,
        date: latest.updated_at,
        preview: format!(
            "Okay, so everyone always asks me about my tech stack. Currently working with \
             {stack}, and let me tell you why {lead} has become my go-to...",
            stack = stack.join(", "),
        ),
        full_content: format!(
            "Okay, so everyone always asks me about my tech stack. Currently working with \
             {stack}, and let me tell you why {lead} has become my go-to language for \
             blockchain development.\n\n\
             The performance benefits are insane. When you're running validators that need to \
             process thousands of transactions per second, every millisecond counts. {lead} \
             gives me that edge.\n\n\
             But here's the thing - it's not just about speed. The tooling ecosystem has \
             exploded in the last year. What used to take me days to set up now takes hours. \
             The community is incredibly welcoming too, especially compared to some other \
             blockchain ecosystems I won't name.\n\n\
             My latest project, {name}, really pushed me to explore {patterns} patterns I \
             hadn't used before. {description}.\n\n\
             If you're starting out in blockchain development, my advice? Pick one language, \
             get really good at it, then expand. Don't try to learn everything at once - I \
             made that mistake early on and it slowed me down significantly.",
            stack = stack.join(", "),
            name = latest.name,
        ),
        tags: stack.iter().take(4).map(|s| s.to_string()).collect(),
        read_time: InsightCategory::Technical.read_time(),
        icon: InsightCategory::Technical.icon(),
        repo_count: repos.len(),
    })
}

fn mentions_security(repo: &RepoRecord) -> bool {
    let name = repo.name.to_lowercase();
    name.contains("security")
        || name.contains("audit")
        || repo
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains("security"))
}

fn security_article(repos: &[&RepoRecord]) -> Option<InsightArticle> {
    let security: Vec<&&RepoRecord> = repos.iter().filter(|r| mentions_security(r)).collect();
    if security.is_empty() && repos.len() <= 5 {
        return None;
    }
    let subject = security.first().copied().or(repos.first())?;

    let focus = subject
        .description
        .as_deref()
        .unwrap_or("security best practices");

    Some(InsightArticle {
        id: 0,
        title: "The Security Mistakes I Made (So You Don't Have To)".to_string(),
        category: InsightCategory::Security,
        date: subject.created_at,
        preview: "Let's be real - everyone makes security mistakes when they're starting out. \
                  I've made my fair share, and some of them were pretty embarrassing. But hey, \
                  that's how we learn, right?"
            .to_string(),
        full_content: format!(
            "Let's be real - everyone makes security mistakes when they're starting out. I've \
             made my fair share, and some of them were pretty embarrassing. But hey, that's how \
             we learn, right?\n\n\
             Mistake #1: Using the same private keys across testnet and mainnet. Yeah, I know, \
             rookie mistake. Lost some testnet tokens, learned a valuable lesson. Now I have \
             completely separate setups.\n\n\
             Mistake #2: Not properly monitoring my validators. Woke up one morning to find my \
             validator had been slashed because I missed some network updates. Now I have \
             monitoring scripts that send me alerts on Telegram.\n\n\
             The biggest lesson? Always assume you're being watched. Whether it's other \
             validators, hackers, or just curious community members - operate as if everything \
             you do is public. Because in blockchain, it basically is.\n\n\
             I've been working on {name} recently, focusing on {focus}. It's taught me that \
             security isn't just about the code - it's about the entire operational workflow.\n\n\
             My current security stack includes hardware wallets for anything valuable, \
             separate machines for different networks, and automated monitoring for all my \
             nodes. Overkill? Maybe. But I sleep better at night.",
            name = subject.name,
        ),
        tags: vec![
            "Security".to_string(),
            "Best Practices".to_string(),
            "Monitoring".to_string(),
            "Hardware".to_string(),
        ],
        read_time: InsightCategory::Security.read_time(),
        icon: InsightCategory::Security.icon(),
        repo_count: repos.len(),
    })
}

fn analysis_article(repos: &[&RepoRecord]) -> Option<InsightArticle> {
    let modern: Vec<&&RepoRecord> = repos
        .iter()
        .filter(|r| r.created_at.year() >= 2024)
        .collect();
    let first = modern.first()?;

    Some(InsightArticle {
        id: 0,
        title: "The Blockchain Trends That Actually Matter in 2025".to_string(),
        category: InsightCategory::Analysis,
        date: first.created_at,
        preview: "Everyone's talking about the next big thing in blockchain, but honestly? \
                  Most of it's just hype. Let me tell you what I think actually matters based \
                  on what I'm seeing in the trenches..."
            .to_string(),
        full_content: format!(
            "Everyone's talking about the next big thing in blockchain, but honestly? Most of \
             it's just hype. Let me tell you what I think actually matters based on what I'm \
             seeing in the trenches.\n\n\
             First up: modular blockchains. This isn't just a buzzword - it's actually solving \
             real problems. I've been experimenting with {name} lately, and the difference in \
             development speed is night and day.\n\n\
             Zero-knowledge proofs are finally becoming practical. Not the academic papers kind \
             of practical, but actual \"I can implement this in production\" practical. The \
             tooling has improved so much that what used to require a PhD now just needs a good \
             tutorial.\n\n\
             But here's what nobody talks about: user experience is still terrible. We're so \
             focused on technical innovation that we've forgotten regular people need to use \
             this stuff. The projects that figure out UX will win, regardless of how fancy \
             their consensus mechanism is.\n\n\
             My prediction? The next bull run won't be driven by DeFi 2.0 or whatever. It'll be \
             driven by applications that normal people actually want to use. And most of them \
             will be built on boring, reliable infrastructure.\n\n\
             The best part about being in this space now? We're still early enough that one \
             person can make a real difference. Every bug report, every validator you run, \
             every line of code you contribute - it all matters.",
            name = first.name,
        ),
        tags: vec![
            "Modular".to_string(),
            "ZK".to_string(),
            "UX".to_string(),
            "Infrastructure".to_string(),
        ],
        read_time: InsightCategory::Analysis.read_time(),
        icon: InsightCategory::Analysis.icon(),
        repo_count: modern.len(),
    })
}

/// Generate at most five articles from the blockchain subset. Ids are
/// assigned sequentially to the articles actually emitted.
pub fn generate_insights(repos: &[&RepoRecord], now: DateTime<Utc>) -> Vec<InsightArticle> {
    let mut articles: Vec<InsightArticle> = [
        experience_article(repos, now),
        strategy_article(repos),
        technical_article(repos),
        security_article(repos),
        analysis_article(repos),
    ]
    .into_iter()
    .flatten()
    .collect();

    for (i, article) in articles.iter_mut().enumerate() {
        article.id = i as u32 + 1;
    }
    articles
}
