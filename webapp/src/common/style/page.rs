pub const PAGE_STYLES: &str = r#"
/* Page layout */
.page {
  min-height: 100vh;
  background-color: var(--background);
  transition: background-color var(--transition-slow) var(--easing-standard);
}

section {
  padding: var(--space-32) 0;
}

section.alt {
  background-color: var(--background-alt);
}

/* Navigation bar */
.site-nav {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 50;
  padding: var(--space-6) 0;
  background-color: transparent;
  transition: all var(--transition-normal) var(--easing-standard);
}

.site-nav.scrolled {
  padding: var(--space-4) 0;
  box-shadow: var(--shadow-xl);
  border-bottom: 1px solid var(--border);
  background-color: var(--glass);
  backdrop-filter: blur(12px);
  -webkit-backdrop-filter: blur(12px);
}

.site-nav .container {
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.logo {
  display: flex;
  align-items: center;
  cursor: pointer;
}

.logo-mark {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 40px;
  height: 40px;
  border-radius: var(--radius-md);
  background-color: var(--primary);
  color: var(--text-inverse);
  font-weight: 900;
  font-style: italic;
  font-size: 1.25rem;
  box-shadow: 0 10px 15px -3px rgba(59, 130, 246, 0.5);
  transition: transform var(--transition-fast) var(--easing-standard);
}

.logo:hover .logo-mark {
  transform: scale(1.1);
}

.logo-word {
  padding-left: var(--space-2);
  font-size: 1.5rem;
  font-weight: 900;
  letter-spacing: -0.05em;
  color: var(--text-primary);
}

.nav-links {
  display: flex;
  align-items: center;
  gap: var(--space-8);
}

.nav-link {
  background: none;
  border: none;
  cursor: pointer;
  font-size: 12px;
  font-weight: 900;
  letter-spacing: 0.2em;
  text-transform: uppercase;
  color: var(--zinc-600);
  transition: color var(--transition-fast) var(--easing-standard);
}

:root.dark .nav-link {
  color: var(--zinc-400);
}

.nav-link:hover {
  color: var(--accent-text);
}

.nav-toggles {
  display: flex;
  align-items: center;
  gap: var(--space-4);
  margin-left: var(--space-4);
  padding-left: var(--space-4);
  border-left: 1px solid var(--border);
}

.menu-btn {
  display: none;
}

/* Mobile overlay, only shown on small screens */
.mobile-menu {
  display: none;
  position: fixed;
  inset: 0;
  z-index: 40;
  padding: var(--space-32) var(--space-8) 0;
  background-color: var(--background);
  animation: slide-in 300ms var(--easing-standard);
}

.mobile-menu-links {
  display: flex;
  flex-direction: column;
  gap: var(--space-8);
}

.mobile-menu .nav-link {
  font-size: 2.25rem;
  letter-spacing: -0.05em;
  text-align: left;
  color: var(--text-primary);
}

.mobile-menu .nav-toggles {
  margin: 0;
  padding: var(--space-12) 0 0;
  border-left: none;
  border-top: 1px solid var(--border);
  gap: var(--space-6);
}

@keyframes slide-in {
  from { transform: translateY(-100%); }
  to { transform: translateY(0); }
}

/* About */
.about {
  padding-top: 160px;
  overflow: hidden;
}

.about-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 80px;
  align-items: center;
}

.badge {
  display: inline-flex;
  align-items: center;
  gap: var(--space-2);
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-full);
  border: 1px solid var(--border);
  background-color: var(--tint);
  color: var(--accent-text);
  font-size: 0.75rem;
  font-weight: 900;
  letter-spacing: 0.1em;
  text-transform: uppercase;
}

.display-title {
  margin: var(--space-10) 0;
  font-size: 6rem;
  font-weight: 900;
  line-height: 0.9;
  letter-spacing: -0.05em;
  text-transform: uppercase;
  color: var(--text-primary);
}

.lead {
  max-width: 36rem;
  font-size: 1.25rem;
  font-weight: 500;
  color: var(--text-secondary);
}

.lead p + p {
  margin-top: var(--space-6);
}

.about-actions {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-4);
  margin-top: var(--space-10);
}

.hero-visual {
  position: relative;
}

.hero-visual img {
  position: relative;
  width: 100%;
  height: 600px;
  object-fit: cover;
  border-radius: 4rem;
  border: 1px solid var(--border);
  box-shadow: var(--shadow-xl);
  filter: grayscale(1);
  transition: filter 700ms var(--easing-standard);
}

.hero-visual img:hover {
  filter: grayscale(0);
}

.approach {
  position: absolute;
  right: -32px;
  bottom: -32px;
  max-width: 280px;
  padding: var(--space-8);
  border-radius: var(--radius-lg);
  border: 1px solid var(--border);
  box-shadow: var(--shadow-xl);
}

.approach-head {
  display: flex;
  align-items: center;
  gap: var(--space-4);
  margin-bottom: var(--space-4);
  font-size: 0.875rem;
  font-weight: 900;
  text-transform: uppercase;
  color: var(--text-primary);
}

.approach-head .icon-wrap {
  padding: var(--space-3);
  border-radius: var(--radius-md);
  background-color: var(--primary);
  color: var(--text-inverse);
}

.approach p {
  font-size: 0.75rem;
  font-weight: 700;
  text-transform: uppercase;
  color: var(--text-tertiary);
}

/* Grids */
.grid-2 {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: var(--space-12);
}

.grid-3 {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: var(--space-8);
}

/* Thematic areas */
.area-card.featured {
  border: 4px solid var(--primary);
  transform: scale(1.05);
  z-index: 10;
}

.area-watermark {
  position: absolute;
  top: 0;
  right: 0;
  padding: var(--space-8);
  opacity: 0.05;
  color: var(--text-primary);
}

.area-card h3,
.audience-card h4 {
  margin-bottom: var(--space-6);
  font-size: 1.875rem;
  font-weight: 900;
  letter-spacing: -0.05em;
  text-transform: uppercase;
  color: var(--text-primary);
}

.ai-mark {
  margin-right: var(--space-1);
  font-style: italic;
  color: var(--primary);
}

.area-card p {
  margin-bottom: var(--space-8);
  font-weight: 600;
  color: var(--text-secondary);
}

.check-list {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: var(--space-4);
}

.check-list li {
  display: flex;
  align-items: center;
  gap: var(--space-3);
  font-size: 0.875rem;
  font-weight: 900;
  letter-spacing: 0.1em;
  text-transform: uppercase;
  color: var(--zinc-400);
}

.check-list .icon {
  color: var(--primary);
}

/* Project cards */
.card-head {
  display: flex;
  justify-content: space-between;
  align-items: flex-start;
  margin-bottom: var(--space-6);
}

.card-head .icon-tile {
  margin: 0;
}

.meta {
  display: flex;
  align-items: center;
  gap: var(--space-2);
  font-size: 0.75rem;
  font-weight: 700;
  letter-spacing: 0.1em;
  text-transform: uppercase;
  color: var(--zinc-400);
}

.project-card h3 {
  margin-bottom: var(--space-2);
  font-size: 1.5rem;
  font-weight: 900;
  color: var(--text-primary);
}

.project-org {
  display: flex;
  align-items: center;
  gap: var(--space-2);
  margin-bottom: var(--space-4);
  font-size: 0.875rem;
  font-weight: 700;
  letter-spacing: 0.05em;
  text-transform: uppercase;
  color: var(--accent-text);
}

.project-card p.summary {
  flex-grow: 1;
  margin-bottom: var(--space-6);
  font-weight: 500;
  color: var(--text-secondary);
}

.tags {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-2);
  margin-bottom: var(--space-8);
}

/* Partners */
.partners {
  padding: var(--space-24) 0;
  border-top: 1px solid var(--border-soft);
  border-bottom: 1px solid var(--border-soft);
}

.partner-row {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  align-items: center;
  gap: var(--space-24);
  opacity: 0.6;
  transition: opacity var(--transition-normal) var(--easing-standard);
}

.partner-row:hover {
  opacity: 1;
}

.partner {
  font-size: 1.5rem;
  font-weight: 900;
  letter-spacing: -0.05em;
  color: var(--zinc-400);
}

/* News */
.news-card {
  background-color: var(--background-alt);
  box-shadow: none;
}

.news-card:hover {
  border-color: var(--primary);
}

.news-date {
  display: flex;
  align-items: center;
  gap: var(--space-2);
  margin-bottom: var(--space-4);
  font-size: 0.75rem;
  font-weight: 900;
  letter-spacing: 0.1em;
  color: var(--accent-text);
}

.pulse {
  width: 8px;
  height: 8px;
  border-radius: var(--radius-full);
  background-color: var(--primary);
  animation: pulse 2s ease-in-out infinite;
}

@keyframes pulse {
  50% { opacity: 0.5; }
}

.news-card h4 {
  margin-bottom: var(--space-4);
  font-size: 1.25rem;
  font-weight: 900;
  color: var(--text-primary);
}

.news-card p {
  margin-bottom: var(--space-6);
  font-weight: 500;
  color: var(--text-secondary);
  display: -webkit-box;
  -webkit-line-clamp: 2;
  -webkit-box-orient: vertical;
  overflow: hidden;
}

/* Contact */
.contact-head {
  margin-bottom: var(--space-24);
  text-align: center;
}

.contact-head p {
  max-width: 48rem;
  margin: 0 auto;
  font-size: 1.5rem;
  font-weight: 700;
  color: var(--text-secondary);
}

.audience-card ul {
  flex-grow: 1;
  margin-bottom: var(--space-10);
}

.dot {
  width: 6px;
  height: 6px;
  border-radius: var(--radius-full);
  background-color: var(--primary);
}

.mail-banner {
  position: relative;
  margin-top: var(--space-24);
  padding: var(--space-24);
  border-radius: 4.5rem;
  overflow: hidden;
  text-align: center;
  color: var(--text-inverse);
  background: linear-gradient(135deg, #1D4ED8, #312E81);
  box-shadow: var(--shadow-xl);
}

.mail-banner h3 {
  margin-bottom: var(--space-12);
  font-size: 4.5rem;
  font-weight: 900;
  line-height: 1.1;
  letter-spacing: -0.05em;
  text-transform: uppercase;
}

.mail-link {
  display: inline-flex;
  align-items: center;
  gap: var(--space-4);
  padding: var(--space-6) var(--space-10);
  border-radius: 2rem;
  border: 1px solid rgba(255, 255, 255, 0.2);
  background-color: rgba(255, 255, 255, 0.1);
  color: var(--text-inverse);
  font-size: 1.25rem;
  font-weight: 900;
  letter-spacing: 0.1em;
  text-transform: uppercase;
  transition: all var(--transition-normal) var(--easing-standard);
}

.mail-link:hover {
  background-color: #FFFFFF;
  color: #1E3A8A;
  text-decoration: none;
}

/* Footer */
.site-footer {
  padding: var(--space-24) 0;
  border-top: 1px solid var(--border);
  background-color: var(--background);
}

.footer-grid {
  display: grid;
  grid-template-columns: 2fr 1fr 1fr;
  gap: var(--space-12);
  margin-bottom: var(--space-16);
}

.footer-mission {
  max-width: 24rem;
  margin-top: var(--space-6);
  font-size: 0.875rem;
  font-weight: 700;
  text-transform: uppercase;
  color: var(--text-tertiary);
}

.footer-heading {
  margin-bottom: var(--space-8);
  font-size: 0.75rem;
  font-weight: 900;
  letter-spacing: 0.1em;
  text-transform: uppercase;
  color: var(--text-primary);
}

.footer-links {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: var(--space-4);
}

.footer-links .nav-link {
  color: var(--zinc-400);
}

.connect {
  display: flex;
  gap: var(--space-4);
}

.connect a {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 48px;
  height: 48px;
  border-radius: var(--radius-lg);
  background-color: var(--surface-muted);
  color: var(--text-secondary);
}

.connect a:hover {
  background-color: var(--primary);
  color: var(--text-inverse);
}

.footer-bottom {
  display: flex;
  justify-content: space-between;
  align-items: center;
  gap: var(--space-8);
  padding-top: var(--space-12);
  border-top: 1px solid var(--border-soft);
  font-size: 10px;
  font-weight: 900;
  letter-spacing: 0.3em;
  text-transform: uppercase;
  color: var(--zinc-400);
}

.footer-legal {
  display: flex;
  gap: var(--space-8);
  letter-spacing: 0.1em;
}

/* Small screens */
@media (max-width: 768px) {
  .nav-links { display: none; }
  .menu-btn { display: inline-flex; }
  .mobile-menu { display: block; }
  .about-grid, .grid-2, .grid-3, .footer-grid { grid-template-columns: 1fr; }
  .display-title { font-size: 3.75rem; }
  .mail-banner { padding: var(--space-16) var(--space-6); }
  .mail-banner h3 { font-size: 3rem; }
  .footer-bottom { flex-direction: column; }
  .area-card.featured { transform: none; }
}
"#;
