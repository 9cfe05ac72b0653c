//! Template bodies. `{{name}}` and `{{description}}` are the only placeholders.

pub const GITIGNORE: &str = "node_modules/
.nyc_output/
coverage/
dist/
tmp/
npm-debug.log*
.DS_Store
";

pub const README: &str = r#"# {{name}}
{{description}}

## Commands
Command                | Description                                      |
-----------------------|--------------------------------------------------|
`$ npm start`          | Start the development server
`$ npm test`           | Lint, validate deps & run tests
`$ npm run build`      | Compile all files into `dist/`
`$ npm run create`     | Generate a scaffold file
`$ npm run inspect`    | Inspect the bundle's dependencies
"#;

pub const INDEX: &str = r#"var css = require('sheetify')
var choo = require('choo')

css('ress')
css('./assets/css/gr8.js')
css('./assets/css/base.css')

var app = choo()
if (process.env.NODE_ENV !== 'production') {
  app.use(require('choo-devtools')())
}

app.route('/', require('./views/main'))
app.route('/*', require('./views/404'))

module.exports = app.mount('body')
"#;

pub const WEB_MANIFEST: &str = r##"{
  "name": "{{name}}",
  "short_name": "{{name}}",
  "description": "{{description}}",
  "start_url": "/",
  "display": "standalone",
  "background_color": "#000",
  "theme_color": "#000",
  "icons": [{
    "src": "/assets/icon.png",
    "type": "image/png",
    "sizes": "512x512"
  }]
}
"##;

pub const MAIN_VIEW: &str = r#"var html = require('choo/html')

var TITLE = '{{name}} - main'

module.exports = view

function view (state, emit) {
  if (state.title !== TITLE) emit(state.events.DOMTITLECHANGE, TITLE)

  return html`
    <body class="ff-sans">
    </body>
  `
}
"#;

pub const NOT_FOUND_VIEW: &str = r#"var html = require('choo/html')

var TITLE = '{{name}} - route not found'

module.exports = view

function view (state, emit) {
  if (state.title !== TITLE) emit(state.events.DOMTITLECHANGE, TITLE)
  return html`
    <body class="ff-sans">
      <h1>Route not found.</h1>
      <a href="/">Back to main.</a>
    </body>
  `
}
"#;

pub const BASE_CSS: &str = "html {
  font-size: 16px;
  font-weight: 400;
  line-height: 1.2;
}

h1, h2, h3, h4, h5, h6, h7 {
  font-size: inherit;
  font-weight: inherit;
  font-style: inherit;
  margin-bottom: 1.2rem;
}

button, input {
  outline: none;
}

ul, ol, li {
  list-style: none;
}

ul, ol {
  margin-bottom: 1.2rem;
}

a {
  color: inherit;
  text-decoration: inherit;
}

p {
  margin-bottom: 1.2rem;
  hyphens: auto;
}

table {
  border-collapse: collapse;
}

button {
  background: none !important;
  color: inherit;
  border: none;
  padding: 0 !important;
  font: inherit;
  cursor: pointer;
}

img {
  max-width: 100%;
}
";

pub const GR8_CSS: &str = r#"var gr8 = require('gr8')

var opts = {
  breakpointSelector: 'class',
  utils: []
}

var colors = {
  black: '#000',
  white: '#fff'
}

var borderWeights = [1]

var borders = {}

for (var weight of borderWeights) {
  for (var color in colors) {
    borders[weight + '-' + color] = `${weight}px solid ${colors[color]}`
  }
}

opts.utils.push({
  prop: [
    'border',
    'border-top',
    'border-right',
    'border-bottom',
    'border-left'
  ],
  vals: borders
})

opts.utils.push({
  prop: { bgc: 'background-color' },
  join: '-',
  vals: colors
})

opts.utils.push({
  prop: 'color',
  join: '-',
  vals: colors
})

opts.utils.push({
  prop: 'font-family',
  join: '-',
  vals: {
    sans: `-apple-system, BlinkMacSystemFont, 'avenir next', avenir, 'helvetica neue', helvetica, ubuntu, roboto, noto, 'segoe ui', arial, sans-serif`,
    serif: `'Times New Roman', serif`
  }
})

opts.utils.push({
  prop: {
    mx: 'max-width',
    my: 'max-height'
  },
  unit: '%',
  vals: [100]
})

opts.utils.push({
  prop: 'text-decoration',
  vals: {
    'u-hover': 'underline',
    'o-hover': 'overline',
    'lt-hover': 'line-through',
    'n-hover': 'none'
  },
  tail: ':hover'
})

module.exports = gr8(opts)
"#;
