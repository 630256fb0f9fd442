// src/pages/forms.rs

//! Form models of the editable collection entities.

use chrono::{DateTime, Local, NaiveDate};
use serde_json::{Map, Value};

use crate::models::{Article, ArticleStatus, Faq, FooterItem, Job, JobType, Service};
use crate::pages::form::FormModel;

/// Date format of the article publish-date input.
const DATE_FORMAT: &str = "%Y-%m-%d";

fn trimmed(value: &str) -> String {
    value.trim().to_string()
}

/// `YYYY-MM-DD` of an ISO date or timestamp; `None` if unparseable.
fn date_part(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.date_naive().format(DATE_FORMAT).to_string());
    }
    let head = raw.get(..10)?;
    NaiveDate::parse_from_str(head, DATE_FORMAT)
        .ok()
        .map(|d| d.format(DATE_FORMAT).to_string())
}

fn today() -> String {
    Local::now().date_naive().format(DATE_FORMAT).to_string()
}

// --- Article ---

#[derive(Debug, Clone, PartialEq)]
pub struct ArticleForm {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub author: String,
    pub image: String,
    pub tags: Vec<String>,
    /// Free text; normalized to Draft/Published on submit
    pub status: String,
    /// `YYYY-MM-DD`
    pub published_at: String,
}

impl Default for ArticleForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            slug: String::new(),
            content: String::new(),
            author: String::new(),
            image: String::new(),
            tags: Vec::new(),
            status: ArticleStatus::Draft.to_string(),
            published_at: today(),
        }
    }
}

impl FormModel for ArticleForm {
    type Entity = Article;

    const REQUIRED: &'static [(&'static str, &'static str)] =
        &[("title", "Title"), ("content", "Content")];
    const LIST_ROUTE: Option<&'static str> = Some("/article");

    fn from_entity(article: &Article) -> Self {
        Self {
            title: article.title.clone(),
            slug: article.slug.clone(),
            content: article.content.clone(),
            author: article.author.clone(),
            image: article.image.clone(),
            tags: article.tags.clone(),
            status: article.status.to_string(),
            published_at: article
                .published_at
                .as_deref()
                .and_then(date_part)
                .unwrap_or_default(),
        }
    }

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "title" => Some(&self.title),
            "slug" => Some(&self.slug),
            "content" => Some(&self.content),
            "author" => Some(&self.author),
            "image" => Some(&self.image),
            "status" => Some(&self.status),
            "publishedAt" => Some(&self.published_at),
            _ => None,
        }
    }

    fn into_payload(self) -> Article {
        let published_at = trimmed(&self.published_at);
        Article {
            id: None,
            title: trimmed(&self.title),
            slug: trimmed(&self.slug),
            content: self.content,
            author: trimmed(&self.author),
            image: trimmed(&self.image),
            tags: self
                .tags
                .iter()
                .map(|t| trimmed(t))
                .filter(|t| !t.is_empty())
                .collect(),
            status: ArticleStatus::normalize(&self.status),
            published_at: (!published_at.is_empty()).then_some(published_at),
            extra: Map::new(),
        }
    }
}

// --- Service ---

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServiceForm {
    pub title: String,
    pub excerpt: String,
    pub point_heading: String,
    pub description: String,
    pub description_bottom: String,
    pub icon: String,
    pub points: Vec<Value>,
}

impl ServiceForm {
    pub fn add_point(&mut self) {
        self.points.push(Value::String(String::new()));
    }

    /// Remove the point at `index`; out of range is ignored.
    pub fn remove_point(&mut self, index: usize) {
        if index < self.points.len() {
            self.points.remove(index);
        }
    }
}

impl FormModel for ServiceForm {
    type Entity = Service;

    const REQUIRED: &'static [(&'static str, &'static str)] = &[
        ("title", "Title"),
        ("excerpt", "Excerpt"),
        ("pointHeading", "Point heading"),
        ("description", "Description"),
        ("icon", "Icon"),
    ];
    const LIST_ROUTE: Option<&'static str> = Some("/service");

    fn from_entity(service: &Service) -> Self {
        Self {
            title: service.title.clone(),
            excerpt: service.excerpt.clone(),
            point_heading: service.point_heading.clone(),
            description: service.description.clone(),
            description_bottom: service.description_bottom.clone(),
            icon: service.icon.clone(),
            points: service.points.clone(),
        }
    }

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "title" => Some(&self.title),
            "excerpt" => Some(&self.excerpt),
            "pointHeading" => Some(&self.point_heading),
            "description" => Some(&self.description),
            "descriptionBottom" => Some(&self.description_bottom),
            "icon" => Some(&self.icon),
            _ => None,
        }
    }

    fn into_payload(self) -> Service {
        Service {
            id: None,
            title: trimmed(&self.title),
            excerpt: trimmed(&self.excerpt),
            point_heading: trimmed(&self.point_heading),
            description: self.description,
            description_bottom: self.description_bottom,
            icon: self.icon,
            points: self.points,
            extra: Map::new(),
        }
    }
}

// --- Job ---

#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobForm {
    pub title: String,
    pub location: String,
    pub job_type: JobType,
    pub description: String,
    pub requirements: String,
}

impl FormModel for JobForm {
    type Entity = Job;

    const REQUIRED: &'static [(&'static str, &'static str)] = &[
        ("title", "Title"),
        ("location", "Location"),
        ("description", "Description"),
    ];

    fn from_entity(job: &Job) -> Self {
        Self {
            title: job.title.clone(),
            location: job.location.clone(),
            job_type: job.job_type,
            description: job.description.clone(),
            requirements: job.requirements.clone(),
        }
    }

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "title" => Some(&self.title),
            "location" => Some(&self.location),
            "type" => Some(self.job_type.as_str()),
            "description" => Some(&self.description),
            "requirements" => Some(&self.requirements),
            _ => None,
        }
    }

    fn into_payload(self) -> Job {
        Job {
            id: None,
            title: trimmed(&self.title),
            location: trimmed(&self.location),
            job_type: self.job_type,
            description: self.description,
            requirements: self.requirements,
            extra: Map::new(),
        }
    }
}

// --- FAQ ---

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FaqForm {
    pub question: String,
    pub answer: String,
}

impl FormModel for FaqForm {
    type Entity = Faq;

    const REQUIRED: &'static [(&'static str, &'static str)] =
        &[("question", "Question"), ("answer", "Answer")];
    const LIST_ROUTE: Option<&'static str> = Some("/faqs");

    fn from_entity(faq: &Faq) -> Self {
        Self {
            question: faq.question.clone(),
            answer: faq.answer.clone(),
        }
    }

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "question" => Some(&self.question),
            "answer" => Some(&self.answer),
            _ => None,
        }
    }

    fn into_payload(self) -> Faq {
        Faq {
            id: None,
            question: trimmed(&self.question),
            answer: trimmed(&self.answer),
            extra: Map::new(),
        }
    }
}

// --- Footer ---

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FooterForm {
    pub title: String,
    pub section: String,
    pub link: String,
    pub content: String,
}

impl FormModel for FooterForm {
    type Entity = FooterItem;

    const REQUIRED: &'static [(&'static str, &'static str)] =
        &[("title", "Title"), ("section", "Section")];
    const LIST_ROUTE: Option<&'static str> = Some("/footer");

    fn from_entity(item: &FooterItem) -> Self {
        Self {
            title: item.title.clone(),
            section: item.section.clone(),
            link: item.link.clone(),
            content: item.content.clone(),
        }
    }

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "title" => Some(&self.title),
            "section" => Some(&self.section),
            "link" => Some(&self.link),
            "content" => Some(&self.content),
            _ => None,
        }
    }

    fn into_payload(self) -> FooterItem {
        FooterItem {
            id: None,
            title: trimmed(&self.title),
            section: trimmed(&self.section),
            link: trimmed(&self.link),
            content: self.content,
            extra: Map::new(),
        }
    }
}
