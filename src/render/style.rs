/// Stylesheet embedded into every HTML page
pub const STYLESHEET: &str = r#"* { box-sizing: border-box; }
body { margin: 0; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; line-height: 1.6; color: #1f2933; background: #f5f7fa; }
.page { max-width: 1100px; margin: 0 auto; padding: 48px 24px 64px; }
.hero { background: linear-gradient(135deg, #1d4ed8 0%, #7c3aed 100%); color: white; padding: 40px; border-radius: 16px; }
.hero h1 { font-size: 2.2rem; margin: 12px 0; }
.tag { display: inline-block; font-size: 0.8rem; text-transform: uppercase; letter-spacing: 0.08em; background: rgba(255,255,255,0.2); padding: 4px 12px; border-radius: 999px; }
.lead { font-size: 1.1rem; max-width: 760px; margin: 0; }
.section { margin-top: 48px; }
.section-heading p { color: #52606d; max-width: 760px; }
.recommendation-card { position: relative; background: white; border: 2px solid #1d4ed8; border-radius: 16px; padding: 32px; box-shadow: 0 10px 30px rgba(29,78,216,0.12); }
.badge { display: inline-block; background: #1d4ed8; color: white; font-weight: 600; padding: 4px 12px; border-radius: 999px; font-size: 0.85rem; }
.recommendation-focus { font-size: 1.05rem; }
.recommendation-highlights ul { padding-left: 20px; }
.recommendation-highlights li { margin-bottom: 10px; }
.comparison-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 20px; }
.department-card { position: relative; background: white; border: 1px solid #e4e7eb; border-radius: 12px; padding: 24px; }
.department-card--highlight { border-color: #1d4ed8; box-shadow: 0 6px 20px rgba(29,78,216,0.15); }
.department-flag { position: absolute; top: 12px; right: 12px; background: #1d4ed8; color: white; font-size: 0.75rem; padding: 2px 10px; border-radius: 999px; }
.department-focus { font-weight: 500; }
.department-details ul { padding-left: 18px; }
.department-best, .department-consider { color: #3e4c59; }
.tips-list li { margin-bottom: 10px; }
.citation { text-decoration: none; color: #1d4ed8; font-size: 0.75rem; margin-left: 2px; }
.sources ol { padding-left: 20px; }
.sources li { margin-bottom: 8px; }
.sources a { color: #1d4ed8; }
"#;
