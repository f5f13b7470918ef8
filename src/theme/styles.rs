//! Global CSS styles for EcoQuest Community.
//!
//! Field-guide look: parchment page, white cards, leaf-green accents.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* PARCHMENT (Backgrounds) */
  --parchment: #F5F5DC;
  --parchment-border: #E8DCC0;
  --card-white: #ffffff;
  --surface-muted: #f9fafb;

  /* LEAF GREEN (Flora, Primary Actions) */
  --leaf: #4CAF50;
  --forest: #2E7D32;
  --mint: #ecfdf5;
  --lime: #65a30d;

  /* SKY (Fauna) */
  --sky: #3b82f6;
  --sky-soft: #dbeafe;
  --cyan: #0891b2;

  /* AMBER (Experience, Reflection) */
  --amber: #f59e0b;
  --amber-soft: #fef3c7;
  --sunset: #FF9800;

  /* TEXT */
  --text-primary: #111827;
  --text-secondary: #4b5563;
  --text-muted: #9ca3af;

  /* SEMANTIC */
  --heart: #ef4444;
  --critical: #dc2626;
  --endangered: #ea580c;
  --vulnerable: #ca8a04;

  /* Typography */
  --font-sans: system-ui, -apple-system, 'Segoe UI', sans-serif;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;
  --text-3xl: 3rem;

  /* Shape */
  --radius-md: 0.75rem;
  --radius-lg: 1rem;
  --radius-xl: 1.5rem;
  --shadow-card: 0 10px 25px rgba(0, 0, 0, 0.08);
  --shadow-lift: 0 16px 32px rgba(0, 0, 0, 0.12);

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  background: var(--parchment);
  color: var(--text-primary);
  line-height: 1.5;
  min-height: 100vh;
}

img {
  display: block;
  max-width: 100%;
}

button {
  font: inherit;
  cursor: pointer;
  border: none;
  background: none;
}

button:disabled {
  cursor: not-allowed;
  opacity: 0.5;
}

/* === Buttons === */
.btn-primary,
.btn-action,
.btn-pill,
.btn-ghost {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  font-weight: 700;
  transition: transform var(--transition-fast), background var(--transition-fast);
}

.btn-primary {
  padding: 0.75rem 1.5rem;
  border-radius: var(--radius-md);
  color: white;
  background: linear-gradient(90deg, #22c55e, #059669);
  box-shadow: 0 4px 10px rgba(5, 150, 105, 0.25);
}

.btn-primary:hover:not(:disabled) {
  transform: scale(1.05);
}

.btn-action {
  color: var(--text-secondary);
  font-size: var(--text-base);
}

.btn-action:hover:not(:disabled) {
  transform: scale(1.1);
}

.btn-action.is-active,
.btn-action.like-button:hover {
  color: var(--heart);
}

.btn-action.comment-button:hover {
  color: var(--sky);
}

.btn-pill {
  padding: 0.5rem 1rem;
  border-radius: 999px;
  background: var(--card-white);
  color: var(--forest);
  box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15);
}

.btn-ghost {
  width: 100%;
  justify-content: center;
  padding: 0.75rem;
  border-radius: var(--radius-md);
  color: var(--forest);
  background: linear-gradient(90deg, #f0fdf4, var(--mint));
}

.icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
}

.close-btn {
  position: absolute;
  top: 1rem;
  right: 1rem;
  width: 2.5rem;
  height: 2.5rem;
  border-radius: 50%;
  background: rgba(255, 255, 255, 0.9);
  color: var(--heart);
  font-weight: 700;
  box-shadow: var(--shadow-card);
}

/* === Avatar === */
.avatar {
  border-radius: 50%;
  flex-shrink: 0;
  box-shadow: 0 2px 6px rgba(0, 0, 0, 0.12);
}

.avatar--image {
  object-fit: cover;
  border: 2px solid #bbf7d0;
}

.avatar--initial {
  display: flex;
  align-items: center;
  justify-content: center;
  color: white;
  font-weight: 700;
  background: linear-gradient(135deg, #4ade80, #10b981);
}

.avatar--sm { width: 2rem; height: 2rem; font-size: var(--text-sm); }
.avatar--md { width: 3.5rem; height: 3.5rem; font-size: 1.25rem; }
.avatar--lg { width: 3rem; height: 3rem; font-size: 1.25rem; border: 3px solid white; }

.header-auth .avatar--initial {
  background: linear-gradient(135deg, var(--sunset) 0%, #FF6F00 100%);
}

/* === Progress === */
.progress-track {
  width: 100%;
  height: 0.75rem;
  border-radius: 999px;
  background: #e5e7eb;
  overflow: hidden;
}

.progress-fill {
  height: 100%;
  border-radius: 999px;
  transition: width 500ms ease;
}

.progress-fill--flora { background: linear-gradient(90deg, #22c55e, #16a34a); }
.progress-fill--fauna { background: linear-gradient(90deg, #3b82f6, #2563eb); }

.progress-fill--exp {
  background: linear-gradient(90deg, #fbbf24, #f59e0b, #fbbf24);
  background-size: 200% 100%;
  animation: shimmer 2s infinite linear;
}

.progress-label {
  margin-top: 0.5rem;
  font-size: var(--text-xs);
  font-weight: 500;
  color: var(--text-secondary);
}

@keyframes shimmer {
  0% { background-position: 200% 0; }
  100% { background-position: -200% 0; }
}

/* === Header === */
.app-header {
  position: sticky;
  top: 0;
  z-index: 10;
  background: linear-gradient(180deg, #a7f3d0 0%, #d9f99d 100%);
  box-shadow: 0 4px 12px rgba(0, 0, 0, 0.1);
}

.app-header__inner {
  position: relative;
  max-width: 56rem;
  margin: 0 auto;
  padding: 1.5rem;
  text-align: center;
}

.app-header__title {
  font-size: var(--text-3xl);
  font-weight: 700;
  font-style: italic;
  color: white;
  letter-spacing: -0.5px;
  text-shadow: 2px 2px 4px rgba(0, 0, 0, 0.2), -1px -1px 0 var(--forest),
    1px -1px 0 var(--forest), -1px 1px 0 var(--forest), 1px 1px 0 var(--forest);
}

.app-header__subtitle {
  margin-top: 0.5rem;
  font-weight: 500;
  color: var(--forest);
  text-shadow: 0 0 4px rgba(255, 255, 255, 0.8);
}

.header-auth {
  position: absolute;
  top: 0.5rem;
  right: 0.5rem;
}

.header-auth__loading {
  width: 2.5rem;
  height: 2.5rem;
  border-radius: 50%;
  background: rgba(255, 255, 255, 0.3);
  animation: pulse 1.5s ease-in-out infinite;
}

.profile-menu {
  position: absolute;
  right: 0;
  margin-top: 0.5rem;
  width: 16rem;
  text-align: left;
  background: var(--card-white);
  border-radius: var(--radius-lg);
  box-shadow: 0 8px 24px rgba(0, 0, 0, 0.2);
  overflow: hidden;
}

.profile-menu__identity {
  padding: 1rem;
  border-bottom: 1px solid var(--parchment-border);
}

.profile-menu__name {
  font-weight: 700;
  color: var(--forest);
}

.profile-menu__email {
  margin-top: 0.25rem;
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

.profile-menu__signout {
  width: 100%;
  padding: 0.75rem 1rem;
  text-align: left;
  font-weight: 600;
  color: var(--sunset);
}

.profile-menu__signout:hover {
  background: var(--surface-muted);
}

/* === Level Progress === */
.level-progress {
  display: flex;
  align-items: center;
  gap: 1.5rem;
  max-width: 36rem;
  margin: 2rem auto 0;
  padding: 1rem;
  border-radius: var(--radius-lg);
  background: rgba(255, 255, 255, 0.9);
  box-shadow: var(--shadow-lift);
  text-align: left;
}

.level-badge {
  position: relative;
  flex-shrink: 0;
  width: 5rem;
  height: 5rem;
  border-radius: 50%;
  display: flex;
  align-items: center;
  justify-content: center;
}

.level-badge--common { background: linear-gradient(135deg, #22c55e, #10b981, #14b8a6); }
.level-badge--rare { background: linear-gradient(135deg, #3b82f6, #06b6d4, #14b8a6); }
.level-badge--epic { background: linear-gradient(135deg, #f97316, #ef4444, #ec4899); }
.level-badge--legendary { background: linear-gradient(135deg, #9333ea, #ec4899, #f43f5e); }

.level-badge__inner {
  position: absolute;
  inset: 0.25rem;
  border-radius: 50%;
  background: rgba(255, 255, 255, 0.9);
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
}

.level-badge__label {
  font-size: 10px;
  font-weight: 700;
  text-transform: uppercase;
  letter-spacing: 0.05em;
  color: var(--text-muted);
}

.level-badge__value {
  font-size: var(--text-xl);
  font-weight: 900;
  background-clip: text;
  -webkit-background-clip: text;
  color: transparent;
}

.level-progress__body { flex: 1; }

.level-progress__row {
  display: flex;
  justify-content: space-between;
  font-size: var(--text-sm);
  font-weight: 700;
  margin-bottom: 0.4rem;
}

.level-progress__percent { color: #ca8a04; }

.level-progress__exp {
  display: flex;
  justify-content: space-between;
  margin-top: 0.4rem;
  font-size: var(--text-xs);
  font-weight: 600;
  color: var(--text-secondary);
}

/* === Feed === */
.feed {
  max-width: 42rem;
  margin: 0 auto;
  padding: 2rem 1rem 4rem;
}

.feed-loading {
  display: flex;
  justify-content: center;
  padding: 5rem 0;
}

.spinner {
  width: 3rem;
  height: 3rem;
  border-radius: 50%;
  border: 4px solid #bbf7d0;
  border-top-color: var(--leaf);
  animation: spin 1s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

@keyframes pulse {
  0%, 100% { opacity: 1; }
  50% { opacity: 0.5; }
}

.feed-empty {
  padding: 5rem 1rem;
  text-align: center;
}

.feed-empty__title {
  font-size: var(--text-xl);
  font-weight: 700;
  color: var(--forest);
}

.feed-empty__hint {
  margin-top: 0.5rem;
  color: var(--text-secondary);
}

/* === Post Cards === */
.post-card {
  max-width: 42rem;
  margin: 0 auto 2rem;
  background: var(--card-white);
  border-radius: var(--radius-xl);
  box-shadow: var(--shadow-card);
  overflow: hidden;
  transition: box-shadow var(--transition-normal);
}

.post-card:hover {
  box-shadow: var(--shadow-lift);
}

.post-author {
  display: flex;
  align-items: center;
  gap: 1rem;
  padding: 1.25rem;
  border-bottom: 1px solid #f3f4f6;
}

.post-author__name {
  font-size: var(--text-lg);
  font-weight: 700;
}

.post-author__activity {
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

.post-image {
  aspect-ratio: 1 / 1;
  background: #f3f4f6;
}

.post-image img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.post-section {
  padding: 1.5rem;
  border-bottom: 1px solid #f3f4f6;
}

.post-section--highlight {
  background: linear-gradient(135deg, #f0fdf4, var(--mint), #f0fdfa);
}

.post-section--muted {
  background: linear-gradient(135deg, var(--surface-muted), #f3f4f6);
}

.post-section--reflection {
  background: linear-gradient(135deg, #fffbeb, #fff7ed);
}

.post-section__eyebrow {
  color: #22c55e;
}

.post-section__title {
  font-size: var(--text-xl);
  font-weight: 700;
  line-height: 1.2;
}

.post-section__heading {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  margin-bottom: 1rem;
  font-size: var(--text-lg);
  font-weight: 700;
}

.post-section__count {
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

.scientific-name {
  font-style: italic;
  color: var(--text-secondary);
}

.post-caption {
  margin-top: 1rem;
  padding-top: 1rem;
  border-top: 1px solid rgba(187, 247, 208, 0.5);
  font-weight: 500;
}

.post-caption--centered {
  margin: 0;
  padding: 1.5rem;
  border-top: none;
  text-align: center;
  font-style: italic;
  background: rgba(219, 234, 254, 0.3);
}

/* === Quest Details === */
.objective {
  display: flex;
  align-items: flex-start;
  gap: 0.75rem;
  padding: 0.75rem;
  border-radius: var(--radius-md);
  color: var(--text-secondary);
}

.objective--done {
  color: var(--text-primary);
  font-weight: 500;
}

.objective__mark { color: #d1d5db; }
.objective--done .objective__mark { color: #22c55e; }

.target-card {
  padding: 1.25rem;
  margin-bottom: 1.25rem;
  border-radius: var(--radius-lg);
  background: var(--card-white);
  box-shadow: 0 4px 10px rgba(0, 0, 0, 0.06);
}

.target-card__label {
  font-size: var(--text-lg);
  font-weight: 700;
}

.target-card__count {
  margin: 0.5rem 0 0.75rem;
  font-size: var(--text-2xl);
  font-weight: 700;
}

.target-card--flora .target-card__count { color: #16a34a; }
.target-card--fauna .target-card__count { color: #2563eb; }

.target-card__target {
  font-size: var(--text-base);
  font-weight: 500;
  color: var(--text-secondary);
}

.species-gallery {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: 0.5rem;
  margin-bottom: 1rem;
}

.species-tile {
  position: relative;
  aspect-ratio: 1 / 1;
  border-radius: var(--radius-lg);
  overflow: hidden;
  cursor: pointer;
  background: #e5e7eb;
}

.species-tile img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  transition: transform var(--transition-normal);
}

.species-tile:hover img {
  transform: scale(1.1);
}

.species-tile__caption {
  position: absolute;
  inset: auto 0 0 0;
  padding: 0.75rem;
  color: white;
  background: linear-gradient(0deg, rgba(0, 0, 0, 0.8), transparent);
  opacity: 0;
  transition: opacity var(--transition-normal);
}

.species-tile:hover .species-tile__caption { opacity: 1; }

.reflection-quote {
  padding: 1rem;
  border-left: 4px solid #fbbf24;
  border-radius: var(--radius-md);
  background: rgba(255, 255, 255, 0.7);
  font-style: italic;
  font-weight: 500;
}

.post-meta {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  padding: 1.25rem;
  font-size: var(--text-sm);
  font-weight: 500;
  color: var(--text-secondary);
  background: var(--surface-muted);
  border-bottom: 1px solid #f3f4f6;
}

/* === Achievements === */
.achievements {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: 1rem;
}

.stat-tile {
  padding: 1rem;
  border-radius: var(--radius-lg);
  border: 1px solid #f3f4f6;
  box-shadow: 0 4px 10px rgba(0, 0, 0, 0.06);
}

.stat-tile__head {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  margin-bottom: 0.5rem;
}

.stat-tile__label {
  font-size: var(--text-xs);
  font-weight: 700;
  text-transform: uppercase;
  letter-spacing: 0.05em;
  color: var(--text-secondary);
}

.stat-tile__value {
  font-size: var(--text-2xl);
  font-weight: 900;
}

.stat-tile__caption {
  font-size: var(--text-xs);
  font-weight: 500;
}

.stat-tile--green .stat-tile__caption { color: #16a34a; }
.stat-tile--blue .stat-tile__caption { color: #2563eb; }
.stat-tile--amber .stat-tile__caption { color: var(--lime); }
.stat-tile--purple .stat-tile__caption { color: var(--cyan); }

.total-captures {
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 0.75rem;
  width: fit-content;
  margin: 1rem auto 0;
  padding: 0.75rem 1.5rem;
  border-radius: 999px;
  border: 1px solid #fde68a;
  background: #fffbeb;
}

.total-captures__label {
  font-size: var(--text-sm);
  font-weight: 700;
  text-transform: uppercase;
  color: #78350f;
}

.total-captures__value {
  font-size: var(--text-xl);
  font-weight: 900;
  color: var(--amber);
}

/* === Interactions === */
.interaction-bar {
  display: flex;
  align-items: center;
  gap: 2rem;
  padding: 1.25rem;
  background: linear-gradient(90deg, var(--surface-muted), white);
  border-top: 1px solid #f3f4f6;
}

.interaction-bar svg {
  width: 1.5rem;
  height: 1.5rem;
}

.comment-section {
  padding: 1.25rem;
  background: var(--surface-muted);
  border-top: 1px solid #f3f4f6;
}

.comment-list {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  max-height: 15rem;
  overflow-y: auto;
  margin-bottom: 1rem;
}

.comment {
  padding: 1rem;
  border-radius: var(--radius-md);
  border: 1px solid #f3f4f6;
  background: white;
}

.comment__meta {
  display: flex;
  justify-content: space-between;
  margin-bottom: 0.25rem;
}

.comment__author {
  font-size: var(--text-sm);
  font-weight: 700;
}

.comment__time {
  font-size: var(--text-xs);
  color: var(--text-muted);
}

.comment__body {
  font-size: var(--text-sm);
  font-weight: 500;
  color: var(--text-secondary);
}

.comment-form {
  display: flex;
  gap: 0.75rem;
}

.comment-form input,
.sign-in-panel input {
  flex: 1;
  min-width: 0;
  padding: 0.75rem 1rem;
  border: 1px solid #e5e7eb;
  border-radius: var(--radius-md);
  background: white;
  font: inherit;
  font-weight: 500;
}

.comment-form input:focus,
.sign-in-panel input:focus {
  outline: none;
  border-color: var(--leaf);
  box-shadow: 0 0 0 3px rgba(76, 175, 80, 0.2);
}

/* === Conservation Badges === */
.conservation {
  display: inline-block;
  padding: 0.25rem 0.75rem;
  border-radius: 999px;
  font-size: var(--text-xs);
  font-weight: 700;
}

.conservation--critical { background: #fee2e2; color: var(--critical); }
.conservation--endangered { background: #ffedd5; color: var(--endangered); }
.conservation--vulnerable { background: #fef9c3; color: var(--vulnerable); }
.conservation--safe { background: #dcfce7; color: #15803d; }

/* === Modals === */
.modal-backdrop {
  position: fixed;
  inset: 0;
  z-index: 50;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1rem;
  background: rgba(0, 0, 0, 0.5);
}

.modal {
  position: relative;
  width: 100%;
  max-width: 42rem;
  max-height: 90vh;
  overflow-y: auto;
  border-radius: var(--radius-lg);
  background: white;
}

.modal--narrow {
  max-width: 28rem;
  padding: 1.5rem;
}

.modal__hero {
  position: relative;
  height: 24rem;
}

.modal__hero img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.modal__body {
  padding: 1.5rem;
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.modal__title {
  font-size: var(--text-xl);
  font-weight: 700;
  color: var(--forest);
}

.modal__actions {
  display: flex;
  justify-content: flex-end;
  gap: 0.75rem;
  margin-top: 1rem;
}

.sign-in-panel {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.sign-in-panel__link {
  font-size: var(--text-xs);
  word-break: break-all;
  color: var(--text-secondary);
}

.sign-in-panel__error {
  font-size: var(--text-sm);
  color: var(--heart);
}

.sign-in-panel__status {
  font-size: var(--text-sm);
  color: var(--forest);
}
"#;
