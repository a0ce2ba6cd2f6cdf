//! Built-in listing collection served when no file or URL is configured.

pub const SEED_LISTINGS_JSON: &str = r#"[
  {
    "id": 1,
    "title": "Software Engineering Intern",
    "company": "Safaricom PLC",
    "location": "Nairobi, Kenya",
    "type": "Hybrid",
    "duration": "3 months",
    "stipend": "Ksh 25,000/month",
    "deadline": "2024-03-15",
    "description": "Join our engineering team to work on cutting-edge mobile applications. Gain experience in React Native, Node.js, and cloud technologies.",
    "requirements": ["3rd/4th year Computer Science student", "Knowledge of JavaScript/TypeScript", "Basic understanding of REST APIs"],
    "perks": ["Mentorship", "Certificate", "Job offer possibility", "Networking events"],
    "field": "Technology",
    "tags": ["React", "Node.js", "Mobile", "Full-time"],
    "applications": 124,
    "rating": 4.8,
    "featured": true,
    "urgent": true
  },
  {
    "id": 2,
    "title": "Data Science Intern",
    "company": "Equity Bank",
    "location": "Remote",
    "type": "Remote",
    "duration": "6 months",
    "stipend": "Ksh 30,000/month",
    "deadline": "2024-03-20",
    "description": "Work with our data team to analyze customer behavior and develop predictive models using Python and machine learning.",
    "requirements": ["Statistics/Mathematics/CS background", "Python programming", "SQL knowledge"],
    "perks": ["Flexible hours", "Training budget", "Remote work setup"],
    "field": "Data & Analytics",
    "tags": ["Python", "Machine Learning", "SQL", "Data Analysis"],
    "applications": 89,
    "rating": 4.6,
    "featured": true,
    "urgent": false
  },
  {
    "id": 3,
    "title": "Marketing Intern",
    "company": "Andela",
    "location": "Nairobi, Kenya",
    "type": "On-site",
    "duration": "4 months",
    "stipend": "Ksh 20,000/month",
    "deadline": "2024-03-10",
    "description": "Assist our marketing team in developing campaigns, social media management, and content creation.",
    "requirements": ["Marketing/Communications student", "Social media savvy", "Creative writing"],
    "perks": ["Portfolio projects", "Industry connections", "Skill development"],
    "field": "Marketing",
    "tags": ["Digital Marketing", "Content", "Social Media", "Analytics"],
    "applications": 67,
    "rating": 4.5,
    "featured": false,
    "urgent": true
  },
  {
    "id": 4,
    "title": "Finance Intern",
    "company": "KCB Bank",
    "location": "Mombasa, Kenya",
    "type": "Hybrid",
    "duration": "3 months",
    "stipend": "Ksh 22,000/month",
    "deadline": "2024-03-25",
    "description": "Gain hands-on experience in financial analysis, reporting, and budgeting in a leading banking institution.",
    "requirements": ["Finance/Accounting student", "Excel proficiency", "Attention to detail"],
    "perks": ["Banking certification", "Career guidance", "Financial training"],
    "field": "Finance",
    "tags": ["Accounting", "Excel", "Financial Analysis", "Reporting"],
    "applications": 92,
    "rating": 4.7,
    "featured": false,
    "urgent": false
  },
  {
    "id": 5,
    "title": "UI/UX Design Intern",
    "company": "Twiga Foods",
    "location": "Remote",
    "type": "Remote",
    "duration": "5 months",
    "stipend": "Ksh 28,000/month",
    "deadline": "2024-03-05",
    "description": "Design intuitive user interfaces for our agricultural technology platform. Work with product managers and developers.",
    "requirements": ["Design portfolio", "Figma/Sketch experience", "User research basics"],
    "perks": ["Design software license", "Mentor sessions", "Real project experience"],
    "field": "Design",
    "tags": ["Figma", "UI/UX", "Product Design", "Prototyping"],
    "applications": 45,
    "rating": 4.9,
    "featured": true,
    "urgent": true
  },
  {
    "id": 6,
    "title": "Human Resources Intern",
    "company": "NCBA Bank",
    "location": "Nairobi, Kenya",
    "type": "On-site",
    "duration": "4 months",
    "stipend": "Ksh 18,000/month",
    "deadline": "2024-03-18",
    "description": "Support HR operations including recruitment, onboarding, employee engagement, and policy implementation.",
    "requirements": ["HR/Management student", "Communication skills", "Confidentiality"],
    "perks": ["HR certification", "Networking", "Professional development"],
    "field": "Human Resources",
    "tags": ["Recruitment", "HR Operations", "Employee Relations", "Training"],
    "applications": 78,
    "rating": 4.4,
    "featured": false,
    "urgent": false
  },
  {
    "id": 7,
    "title": "Community Outreach Intern",
    "company": "Kisumu Youth Network",
    "location": "Kisumu, Kenya",
    "type": "On-site",
    "duration": "9 months",
    "stipend": "Unpaid",
    "deadline": "2024-04-01",
    "description": "Coordinate community programmes and volunteer logistics across Kisumu county.",
    "requirements": ["Any discipline", "Strong communication skills"],
    "perks": ["Certificate", "Reference letter"],
    "field": "Operations",
    "tags": ["Community", "Logistics", "Volunteering"],
    "applications": 12,
    "rating": 4.2,
    "featured": false,
    "urgent": false
  }
]"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::{ingest_all, RawListing};
    use crate::models::Stipend;

    #[test]
    fn test_seed_ingests_cleanly() {
        let raw: Vec<RawListing> = serde_json::from_str(SEED_LISTINGS_JSON).unwrap();
        let records = ingest_all(raw).unwrap();
        assert_eq!(records.len(), 7);
        assert_eq!(records.iter().filter(|r| r.featured).count(), 3);
        assert_eq!(
            records.iter().filter(|r| r.stipend == Stipend::Unpaid).count(),
            1
        );
    }
}
