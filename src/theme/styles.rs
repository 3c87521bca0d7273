//! Global CSS styles for the portfolio.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Surfaces */
  --bg: #0f1115;
  --surface: #171a21;
  --surface-raised: #1f232c;
  --border: #2a2f3a;

  /* Accent */
  --accent: #3b82f6;
  --accent-soft: rgba(59, 130, 246, 0.15);
  --success: #22c55e;

  /* Text */
  --text-primary: #f3f4f6;
  --text-secondary: rgba(243, 244, 246, 0.72);
  --text-muted: rgba(243, 244, 246, 0.5);

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', Roboto, sans-serif;

  /* Spacing */
  --space-xs: 0.25rem;
  --space-sm: 0.5rem;
  --space-md: 1rem;
  --space-lg: 1.5rem;
  --space-xl: 2.5rem;

  --radius: 12px;
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-sans);
  background: var(--bg);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
}

a { color: var(--accent); text-decoration: none; }

/* === Section Title === */
.section-title {
  text-align: center;
  padding: var(--space-xl) var(--space-md) var(--space-lg);
}

.section-title h2 { font-size: 2rem; }
.section-title p { color: var(--text-secondary); }

.portfolio, .portfolio-details {
  max-width: 1200px;
  margin: 0 auto;
  padding: 0 var(--space-lg) var(--space-xl);
}

/* === Buttons === */
.btn {
  display: inline-flex;
  align-items: center;
  gap: var(--space-xs);
  padding: var(--space-sm) var(--space-md);
  border-radius: 8px;
  border: 1px solid transparent;
  font-size: 0.875rem;
  cursor: pointer;
  transition: background var(--transition-fast), border-color var(--transition-fast);
}

.btn-primary { background: var(--accent); color: #fff; }
.btn-primary:hover { filter: brightness(1.1); }

.btn-outline {
  background: transparent;
  border-color: var(--accent);
  color: var(--accent);
}
.btn-outline:hover { background: var(--accent-soft); }

.btn-ghost { background: transparent; color: var(--text-secondary); }
.btn-ghost:hover { color: var(--text-primary); }

.btn:focus-visible {
  outline: 2px solid var(--accent);
  outline-offset: 2px;
}

.close-btn { font-size: 1.5rem; line-height: 1; }

/* === Filter Buttons === */
.portfolio-filters {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: var(--space-sm);
  margin-bottom: var(--space-lg);
}

.filter-btn {
  padding: var(--space-xs) var(--space-md);
  border-radius: 999px;
  border: 1px solid var(--border);
  background: transparent;
  color: var(--text-secondary);
  cursor: pointer;
  transition: all var(--transition-fast);
}

.filter-btn:hover { border-color: var(--accent); color: var(--text-primary); }
.filter-btn.active { background: var(--accent); border-color: var(--accent); color: #fff; }

/* === Project Grid === */
.portfolio-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
  gap: var(--space-lg);
}

.portfolio-card {
  display: flex;
  flex-direction: column;
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: var(--space-lg);
  transition: transform var(--transition-normal), border-color var(--transition-normal);
}

.portfolio-card:hover { transform: translateY(-4px); border-color: var(--accent); }

.card-header {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-bottom: var(--space-md);
}

.project-icon, .modal-icon {
  width: 48px;
  height: 48px;
  display: grid;
  place-items: center;
  border-radius: 10px;
  background: var(--accent-soft);
  color: var(--accent);
  font-size: 1.5rem;
}

.stack-badge {
  font-size: 0.75rem;
  letter-spacing: 0.05em;
  padding: 2px var(--space-sm);
  border-radius: 6px;
  background: var(--surface-raised);
  color: var(--text-secondary);
}

.card-body { flex: 1; }
.project-title { font-size: 1.125rem; margin-bottom: var(--space-xs); }
.project-short { color: var(--text-secondary); font-size: 0.9rem; }

.tech-tags, .modal-tech {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-xs);
  margin: var(--space-md) 0;
}

.tech-tag {
  font-size: 0.75rem;
  padding: 2px var(--space-sm);
  border-radius: 6px;
  border: 1px solid var(--border);
  color: var(--text-secondary);
}

.impact-highlight {
  display: flex;
  align-items: baseline;
  gap: var(--space-sm);
  margin-bottom: var(--space-md);
}

.impact-value { color: var(--success); font-weight: 700; font-size: 1.25rem; }
.impact-label { color: var(--text-muted); font-size: 0.8rem; }

.project-meta {
  display: flex;
  justify-content: space-between;
  color: var(--text-muted);
  font-size: 0.8rem;
}

.card-actions {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-sm);
  margin-top: var(--space-md);
}

/* === Empty & Loading States === */
.no-results, .loading-state {
  grid-column: 1 / -1;
  text-align: center;
  padding: var(--space-xl);
  color: var(--text-muted);
}

.no-results i { font-size: 2rem; margin-bottom: var(--space-sm); }

/* === Project Modal === */
.project-modal {
  position: fixed;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(0, 0, 0, 0.7);
  opacity: 0;
  visibility: hidden;
  transition: opacity var(--transition-normal), visibility var(--transition-normal);
  z-index: 1000;
}

.project-modal.modal-open { opacity: 1; visibility: visible; }

.modal-content {
  width: min(760px, 92vw);
  max-height: 88vh;
  overflow-y: auto;
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  transform: translateY(16px);
  transition: transform var(--transition-normal);
}

.modal-open .modal-content { transform: translateY(0); }

.modal-header {
  display: flex;
  align-items: center;
  gap: var(--space-md);
  padding: var(--space-lg);
  border-bottom: 1px solid var(--border);
}

.modal-heading { flex: 1; }
.modal-title { font-size: 1.5rem; }

.modal-body { padding: var(--space-lg); }
.modal-description { color: var(--text-secondary); margin-bottom: var(--space-lg); }
.modal-section { margin-bottom: var(--space-lg); }
.modal-section h4 { margin-bottom: var(--space-sm); }

.modal-highlights { list-style: none; }
.modal-highlights li { padding: var(--space-xs) 0; }
.modal-highlights i { color: var(--success); }

.impact-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(140px, 1fr));
  gap: var(--space-md);
}

.impact-item {
  display: flex;
  flex-direction: column;
  padding: var(--space-md);
  border-radius: 10px;
  background: var(--surface-raised);
}

.modal-info { list-style: none; color: var(--text-secondary); }

.modal-footer {
  display: flex;
  justify-content: flex-end;
  gap: var(--space-sm);
  padding: var(--space-md) var(--space-lg);
  border-top: 1px solid var(--border);
}

/* === Detail Page === */
.breadcrumbs {
  padding: var(--space-lg) 0;
  color: var(--text-muted);
}

.details-layout {
  display: grid;
  grid-template-columns: 2fr 1fr;
  gap: var(--space-lg);
}

.portfolio-details-slider img {
  width: 100%;
  border-radius: var(--radius);
}

.portfolio-info {
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: var(--space-lg);
}

.portfolio-info ul { list-style: none; margin-top: var(--space-md); }
.portfolio-info li { padding: var(--space-xs) 0; }

.portfolio-description { padding-top: var(--space-xl); }
.portfolio-description p { color: var(--text-secondary); margin-top: var(--space-sm); }

/* === Accessibility === */
@media (prefers-reduced-motion: reduce) {
  *, *::before, *::after { transition: none !important; }
}

/* === Narrow Windows === */
@media (max-width: 768px) {
  .details-layout { grid-template-columns: 1fr; }
  .portfolio-grid { grid-template-columns: 1fr; }
}
"#;
