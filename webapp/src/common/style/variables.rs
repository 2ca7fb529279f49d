pub const CSS_VARIABLES: &str = r#"
:root {
  /* Color System */
  --primary: #2563EB;          /* Brand blue */
  --primary-light: #60A5FA;    /* Hover and dark-mode accents */
  --primary-dark: #1D4ED8;     /* Active states */
  --indigo: #4F46E5;
  --emerald: #059669;
  --rose: #E11D48;

  /* Neutrals */
  --zinc-50: #FAFAFA;
  --zinc-100: #F4F4F5;
  --zinc-200: #E4E4E7;
  --zinc-300: #D4D4D8;
  --zinc-400: #A1A1AA;
  --zinc-500: #71717A;
  --zinc-600: #52525B;
  --zinc-700: #3F3F46;
  --zinc-800: #27272A;
  --zinc-900: #18181B;
  --zinc-950: #09090B;

  /* Background and Surface Colors */
  --background: #FFFFFF;
  --background-alt: var(--zinc-50);
  --surface: #FFFFFF;
  --surface-muted: var(--zinc-100);
  --glass: rgba(255, 255, 255, 0.75);
  --tint: #EFF6FF;

  /* Text Colors */
  --text-primary: #000000;
  --text-secondary: var(--zinc-700);
  --text-tertiary: var(--zinc-500);
  --text-inverse: #FFFFFF;
  --accent-text: var(--primary);

  /* Border Colors */
  --border: var(--zinc-200);
  --border-soft: var(--zinc-100);

  /* Layout */
  --header-height: 80px;
  --container-width: 1280px;

  /* Spacing System */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-6: 24px;
  --space-8: 32px;
  --space-10: 40px;
  --space-12: 48px;
  --space-16: 64px;
  --space-24: 96px;
  --space-32: 128px;

  /* Radius */
  --radius-md: 12px;
  --radius-lg: 24px;
  --radius-xl: 56px;
  --radius-full: 9999px;

  /* Shadows */
  --shadow-lg: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05);
  --shadow-xl: 0 20px 25px -5px rgba(0, 0, 0, 0.1), 0 10px 10px -5px rgba(0, 0, 0, 0.04);

  /* Transitions */
  --transition-fast: 150ms;
  --transition-normal: 300ms;
  --transition-slow: 500ms;
  --easing-standard: cubic-bezier(0.4, 0, 0.2, 1);
}

/* Dark theme, switched by a single class on <html> */
:root.dark {
  --background: #000000;
  --background-alt: var(--zinc-950);
  --surface: var(--zinc-900);
  --surface-muted: var(--zinc-800);
  --glass: rgba(9, 9, 11, 0.75);
  --tint: rgba(30, 58, 138, 0.2);

  --text-primary: #FFFFFF;
  --text-secondary: var(--zinc-400);
  --text-tertiary: var(--zinc-500);
  --accent-text: var(--primary-light);

  --border: var(--zinc-800);
  --border-soft: var(--zinc-800);
}
"#;
