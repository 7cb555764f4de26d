// The bundled "even" theme: one self-contained HTML page per résumé,
// stylesheet inlined so the rendered document has zero subresources to
// fetch before PDF export.

/// Handlebars template for the `even` theme. Receives the résumé document
/// as its root context and tolerates any missing section.
pub const TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{{basics.name}}</title>
<style>
  :root {
    --ink: #1a1a1a;
    --muted: #555;
    --faint: #999;
    --rule: #d8d8d8;
    --accent: #0b5394;
  }
  * { margin: 0; padding: 0; box-sizing: border-box; }
  body {
    font-family: "Helvetica Neue", Arial, sans-serif;
    font-size: 10.5pt;
    line-height: 1.45;
    color: var(--ink);
    padding: 1.4cm 1.6cm;
  }
  a { color: var(--accent); text-decoration: none; }
  h1 { font-size: 21pt; font-weight: 700; letter-spacing: 0.02em; }
  .label { font-size: 12pt; color: var(--muted); margin-top: 0.1em; }
  .contact {
    list-style: none;
    margin-top: 0.5em;
    color: var(--muted);
  }
  .contact li {
    display: inline;
  }
  .contact li + li::before { content: "  ·  "; color: var(--faint); }
  .profiles { list-style: none; margin-top: 0.2em; color: var(--muted); }
  .profiles li { display: inline; }
  .profiles li + li::before { content: "  ·  "; color: var(--faint); }
  .summary { margin-top: 0.8em; color: var(--ink); }
  section { margin-top: 1.3em; page-break-inside: avoid; }
  h2 {
    font-size: 11pt;
    font-weight: 700;
    text-transform: uppercase;
    letter-spacing: 0.12em;
    color: var(--accent);
    border-bottom: 1px solid var(--rule);
    padding-bottom: 0.2em;
    margin-bottom: 0.6em;
  }
  article { margin-bottom: 0.8em; }
  article:last-child { margin-bottom: 0; }
  .entry {
    display: flex;
    justify-content: space-between;
    align-items: baseline;
    gap: 1em;
  }
  h3 { font-size: 10.5pt; font-weight: 600; }
  .where { color: var(--muted); font-weight: 400; }
  .dates { color: var(--faint); font-size: 9.5pt; white-space: nowrap; }
  article p { color: var(--ink); margin-top: 0.15em; }
  article ul { margin: 0.25em 0 0 1.2em; }
  article li { margin-bottom: 0.15em; }
  .tags { color: var(--muted); font-size: 9.5pt; margin-top: 0.15em; }
  .inline-list { list-style: none; }
  .inline-list li { display: inline-block; margin: 0 1.2em 0.3em 0; }
  .level { color: var(--faint); font-size: 9.5pt; font-weight: 400; }
  blockquote {
    border-left: 2px solid var(--rule);
    padding-left: 0.8em;
    color: var(--muted);
    margin-top: 0.2em;
  }
</style>
</head>
<body>

<header>
  <h1>{{basics.name}}</h1>
  {{#if basics.label}}<p class="label">{{basics.label}}</p>{{/if}}
  <ul class="contact">
    {{#if basics.email}}<li>{{basics.email}}</li>{{/if}}
    {{#if basics.phone}}<li>{{basics.phone}}</li>{{/if}}
    {{#if basics.url}}<li><a href="{{basics.url}}">{{basics.url}}</a></li>{{/if}}
    {{#if basics.location.city}}<li>{{basics.location.city}}{{#if basics.location.region}}, {{basics.location.region}}{{/if}}</li>{{/if}}
  </ul>
  {{#if basics.profiles}}
  <ul class="profiles">
    {{#each basics.profiles}}
    <li>{{network}}: {{#if url}}<a href="{{url}}">{{username}}</a>{{else}}{{username}}{{/if}}</li>
    {{/each}}
  </ul>
  {{/if}}
  {{#if basics.summary}}<p class="summary">{{basics.summary}}</p>{{/if}}
</header>

{{#if work}}
<section>
  <h2>Work</h2>
  {{#each work}}
  <article>
    <header class="entry">
      <h3>{{position}}{{#if name}} <span class="where">· {{name}}</span>{{/if}}</h3>
      {{#if startDate}}<span class="dates">{{fmt_date startDate}} – {{#if endDate}}{{fmt_date endDate}}{{else}}Present{{/if}}</span>{{/if}}
    </header>
    {{#if summary}}<p>{{summary}}</p>{{/if}}
    {{#if highlights}}
    <ul>
      {{#each highlights}}<li>{{this}}</li>{{/each}}
    </ul>
    {{/if}}
  </article>
  {{/each}}
</section>
{{/if}}

{{#if volunteer}}
<section>
  <h2>Volunteer</h2>
  {{#each volunteer}}
  <article>
    <header class="entry">
      <h3>{{position}}{{#if organization}} <span class="where">· {{organization}}</span>{{/if}}</h3>
      {{#if startDate}}<span class="dates">{{fmt_date startDate}} – {{#if endDate}}{{fmt_date endDate}}{{else}}Present{{/if}}</span>{{/if}}
    </header>
    {{#if summary}}<p>{{summary}}</p>{{/if}}
    {{#if highlights}}
    <ul>
      {{#each highlights}}<li>{{this}}</li>{{/each}}
    </ul>
    {{/if}}
  </article>
  {{/each}}
</section>
{{/if}}

{{#if projects}}
<section>
  <h2>Projects</h2>
  {{#each projects}}
  <article>
    <header class="entry">
      <h3>{{#if url}}<a href="{{url}}">{{name}}</a>{{else}}{{name}}{{/if}}</h3>
      {{#if startDate}}<span class="dates">{{fmt_date startDate}} – {{#if endDate}}{{fmt_date endDate}}{{else}}Present{{/if}}</span>{{/if}}
    </header>
    {{#if description}}<p>{{description}}</p>{{/if}}
    {{#if highlights}}
    <ul>
      {{#each highlights}}<li>{{this}}</li>{{/each}}
    </ul>
    {{/if}}
    {{#if keywords}}<p class="tags">{{#each keywords}}{{this}}{{#unless @last}}, {{/unless}}{{/each}}</p>{{/if}}
  </article>
  {{/each}}
</section>
{{/if}}

{{#if education}}
<section>
  <h2>Education</h2>
  {{#each education}}
  <article>
    <header class="entry">
      <h3>{{institution}}</h3>
      {{#if startDate}}<span class="dates">{{fmt_date startDate}} – {{#if endDate}}{{fmt_date endDate}}{{else}}Present{{/if}}</span>{{/if}}
    </header>
    <p>{{#if studyType}}{{studyType}}{{/if}}{{#if area}}{{#if studyType}}, {{/if}}{{area}}{{/if}}{{#if score}} · {{score}}{{/if}}</p>
    {{#if courses}}<p class="tags">{{#each courses}}{{this}}{{#unless @last}}, {{/unless}}{{/each}}</p>{{/if}}
  </article>
  {{/each}}
</section>
{{/if}}

{{#if awards}}
<section>
  <h2>Awards</h2>
  {{#each awards}}
  <article>
    <header class="entry">
      <h3>{{title}}{{#if awarder}} <span class="where">· {{awarder}}</span>{{/if}}</h3>
      {{#if date}}<span class="dates">{{fmt_date date}}</span>{{/if}}
    </header>
    {{#if summary}}<p>{{summary}}</p>{{/if}}
  </article>
  {{/each}}
</section>
{{/if}}

{{#if certificates}}
<section>
  <h2>Certificates</h2>
  {{#each certificates}}
  <article>
    <header class="entry">
      <h3>{{#if url}}<a href="{{url}}">{{name}}</a>{{else}}{{name}}{{/if}}{{#if issuer}} <span class="where">· {{issuer}}</span>{{/if}}</h3>
      {{#if date}}<span class="dates">{{fmt_date date}}</span>{{/if}}
    </header>
  </article>
  {{/each}}
</section>
{{/if}}

{{#if publications}}
<section>
  <h2>Publications</h2>
  {{#each publications}}
  <article>
    <header class="entry">
      <h3>{{#if url}}<a href="{{url}}">{{name}}</a>{{else}}{{name}}{{/if}}{{#if publisher}} <span class="where">· {{publisher}}</span>{{/if}}</h3>
      {{#if releaseDate}}<span class="dates">{{fmt_date releaseDate}}</span>{{/if}}
    </header>
    {{#if summary}}<p>{{summary}}</p>{{/if}}
  </article>
  {{/each}}
</section>
{{/if}}

{{#if skills}}
<section>
  <h2>Skills</h2>
  {{#each skills}}
  <article>
    <h3>{{name}}{{#if level}} <span class="level">({{level}})</span>{{/if}}</h3>
    {{#if keywords}}<p class="tags">{{#each keywords}}{{this}}{{#unless @last}}, {{/unless}}{{/each}}</p>{{/if}}
  </article>
  {{/each}}
</section>
{{/if}}

{{#if languages}}
<section>
  <h2>Languages</h2>
  <ul class="inline-list">
    {{#each languages}}
    <li>{{language}}{{#if fluency}} <span class="level">({{fluency}})</span>{{/if}}</li>
    {{/each}}
  </ul>
</section>
{{/if}}

{{#if interests}}
<section>
  <h2>Interests</h2>
  <ul class="inline-list">
    {{#each interests}}
    <li>{{name}}{{#if keywords}} <span class="level">({{#each keywords}}{{this}}{{#unless @last}}, {{/unless}}{{/each}})</span>{{/if}}</li>
    {{/each}}
  </ul>
</section>
{{/if}}

{{#if references}}
<section>
  <h2>References</h2>
  {{#each references}}
  <article>
    <h3>{{name}}</h3>
    {{#if reference}}<blockquote>{{reference}}</blockquote>{{/if}}
  </article>
  {{/each}}
</section>
{{/if}}

</body>
</html>
"#;
