//! Server block text for the two built-in site templates.

use crate::core::models::{ProxySite, StaticSite};

pub fn static_site(site: &StaticSite) -> String {
    format!(
        "server {{
    listen {port};
    listen [::]:{port};

    server_name {name};
    root {root};
    index index.html index.htm;

    location / {{
        try_files $uri $uri/ =404;
    }}
}}
",
        port = site.port,
        name = site.server_name,
        root = site.site_root,
    )
}

pub fn proxy_site(site: &ProxySite) -> String {
    format!(
        "server {{
    listen {port};
    listen [::]:{port};

    server_name {name};

    location / {{
        proxy_pass http://{host}:{upstream};
        proxy_http_version 1.1;
        proxy_set_header Upgrade $http_upgrade;
        proxy_set_header Connection 'upgrade';
        proxy_set_header Host $host;
        proxy_set_header X-Real-IP $remote_addr;
        proxy_set_header X-Forwarded-For $proxy_add_x_forwarded_for;
        proxy_cache_bypass $http_upgrade;
    }}
}}
",
        port = site.port,
        name = site.server_name,
        host = site.proxy_host,
        upstream = site.proxy_port,
    )
}
