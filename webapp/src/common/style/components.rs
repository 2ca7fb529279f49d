pub const BASE_COMPONENTS: &str = r#"
/* Base Component Styles */

.container {
  width: 100%;
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-6);
}

/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: var(--space-2);
  padding: var(--space-4) var(--space-8);
  border-radius: var(--radius-lg);
  font-weight: 900;
  font-size: 0.875rem;
  letter-spacing: 0.1em;
  text-transform: uppercase;
  cursor: pointer;
  border: none;
  outline: none;
  transition: background-color var(--transition-fast) var(--easing-standard),
              transform var(--transition-fast) var(--easing-standard);
}

.btn:active {
  transform: scale(0.95);
}

.btn-primary {
  background-color: var(--primary);
  color: var(--text-inverse);
  box-shadow: 0 20px 25px -5px rgba(59, 130, 246, 0.3);
}

.btn-primary:hover {
  background-color: var(--primary-dark);
}

.btn-secondary {
  background-color: var(--surface-muted);
  color: var(--text-primary);
}

.btn-link {
  background: none;
  border: none;
  padding: 0;
  cursor: pointer;
  display: inline-flex;
  align-items: center;
  gap: var(--space-2);
  font-weight: 900;
  font-size: 0.875rem;
  letter-spacing: 0.1em;
  text-transform: uppercase;
  color: var(--accent-text);
}

.btn-link .icon {
  transition: transform var(--transition-fast) var(--easing-standard);
}

.btn-link:hover .icon {
  transform: translateX(4px);
}

.icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: var(--space-2);
  border-radius: var(--radius-full);
  background: none;
  border: none;
  cursor: pointer;
  color: var(--text-primary);
}

.icon-btn:hover {
  background-color: var(--surface-muted);
}

.lang-btn {
  padding: var(--space-1) var(--space-3);
  border: 1px solid var(--text-primary);
  border-radius: 6px;
  background: none;
  font-weight: 700;
  font-size: 0.875rem;
  cursor: pointer;
  color: var(--text-primary);
}

:root.dark .lang-btn {
  border-color: var(--zinc-700);
}

/* Cards */
.card {
  position: relative;
  display: flex;
  flex-direction: column;
  padding: var(--space-8);
  border-radius: var(--radius-lg);
  background-color: var(--surface);
  border: 1px solid var(--border);
  box-shadow: var(--shadow-xl);
  overflow: hidden;
  transition: transform var(--transition-slow) var(--easing-standard),
              border-color var(--transition-normal) var(--easing-standard);
}

.card:hover {
  transform: translateY(-8px);
}

.card-xl {
  padding: var(--space-12);
  border-radius: var(--radius-xl);
}

.tag {
  padding: var(--space-1) var(--space-3);
  border-radius: var(--radius-full);
  background-color: var(--surface-muted);
  color: var(--text-tertiary);
  font-size: 10px;
  font-weight: 900;
  letter-spacing: 0.05em;
  text-transform: uppercase;
}

.icon-tile {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 80px;
  height: 80px;
  border-radius: var(--radius-lg);
  margin-bottom: var(--space-10);
  background-color: var(--tint);
  color: var(--primary);
  transition: transform var(--transition-normal) var(--easing-standard);
}

.card:hover .icon-tile {
  transform: scale(1.1);
}

.tone-emerald { color: var(--emerald); }
.tone-rose { color: var(--rose); }
.tone-blue { color: var(--primary); }

.glass {
  background-color: var(--glass);
  backdrop-filter: blur(12px);
  -webkit-backdrop-filter: blur(12px);
}

/* Section heading */
.section-heading {
  margin-bottom: var(--space-16);
  text-align: center;
}

.section-heading.left {
  text-align: left;
}

.section-heading h2 {
  font-size: 3rem;
  font-weight: 900;
  letter-spacing: -0.05em;
  margin-bottom: var(--space-6);
  color: var(--text-primary);
}

.section-heading p {
  max-width: 42rem;
  margin: 0 auto;
  font-size: 1.125rem;
  font-weight: 700;
  color: var(--text-secondary);
}

.section-heading.left p {
  margin: 0;
}
"#;
